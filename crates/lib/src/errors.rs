use thiserror::Error;

/// Errors raised by the AI provider layer.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI endpoint: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the AI response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("The AI endpoint rejected the credential: {0}")]
    AiAuthentication(String),
    #[error("The AI endpoint reported a rate or usage limit: {0}")]
    AiQuotaExceeded(String),
    #[error("The AI endpoint returned an error: {0}")]
    AiApi(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("No usable AI provider configuration: {0}")]
    MissingAiProvider(String),
}
