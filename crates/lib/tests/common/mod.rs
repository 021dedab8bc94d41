//! Shared helpers for the integration tests.

pub mod pdf_fixture;

use async_trait::async_trait;
use gridsage::errors::PromptError;
use gridsage::providers::ai::AiProvider;
use std::sync::{Arc, Mutex};

/// An `AiProvider` that returns a programmed response and records every call
/// for assertion.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    response: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAiProvider {
    /// A provider that answers every call with `response`.
    pub fn with_response(response: &str) -> Self {
        let provider = Self::default();
        *provider.response.lock().unwrap() = Some(response.to_string());
        provider
    }

    /// A provider with no programmed response; every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Retrieves the recorded `(system_prompt, user_prompt)` calls.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match self.response.lock().unwrap().clone() {
            Some(response) => Ok(response),
            None => Err(PromptError::AiApi(
                "MockAiProvider: no response programmed".to_string(),
            )),
        }
    }
}
