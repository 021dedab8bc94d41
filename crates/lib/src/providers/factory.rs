//! # AI Provider Factory
//!
//! Centralizes the construction of AI provider instances from the application
//! configuration, so the binary and tests build providers the same way.

use crate::{
    config::AppConfig,
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

/// Default endpoint for an Ollama-style local server.
const DEFAULT_LOCAL_API_URL: &str = "http://localhost:11434/v1/chat/completions";

/// Creates the AI provider named by the configured model.
///
/// Model names starting with `gemini` route to the Gemini API, which derives
/// its endpoint from the model name and requires an API key. Anything else is
/// treated as a model served by an OpenAI-compatible local endpoint.
pub fn create_provider(config: &AppConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = if config.model_name.starts_with("gemini") {
        let api_key = config.api_key.clone().ok_or(PromptError::MissingApiKey)?;
        let api_url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            config.model_name
        );
        info!("Configuring Gemini provider with URL: {api_url}");
        Box::new(GeminiProvider::new(api_url, api_key)?)
    } else {
        let api_url = config
            .local_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCAL_API_URL.to_string());
        info!("Configuring local AI provider with URL: {api_url}");
        Box::new(LocalAiProvider::new(
            api_url,
            config.api_key.clone(),
            Some(config.model_name.clone()),
        )?)
    };

    Ok(provider)
}
