//! # Application Configuration
//!
//! Runtime configuration is an explicit struct handed to the pipeline rather
//! than a set of module constants, so tests and callers can point a run at
//! arbitrary paths and models. `from_env` layers environment variables over
//! the defaults; the binary loads a `.env` file first via `dotenvy`.

use std::env;
use std::path::PathBuf;

/// Configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the PDF event report to analyze. `PDF_PATH` env var.
    pub pdf_path: PathBuf,
    /// Path the analysis text is written to. `OUTPUT_PATH` env var.
    pub output_path: PathBuf,
    /// Model identifier, e.g. `gemini-2.5-flash` or `llama3.1:8b`.
    /// `AI_MODEL` env var.
    pub model_name: String,
    /// API credential for hosted providers. `AI_API_KEY` env var.
    pub api_key: Option<String>,
    /// Endpoint of an OpenAI-compatible local server, used for non-Gemini
    /// models. `LOCAL_AI_API_URL` env var.
    pub local_api_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pdf_path: PathBuf::from("data/report.pdf"),
            output_path: PathBuf::from("output/llm_analysis.txt"),
            model_name: "gemini-2.5-flash".to_string(),
            api_key: None,
            local_api_url: None,
        }
    }
}

impl AppConfig {
    /// Builds a configuration from the environment, falling back to the
    /// defaults for anything unset. An empty variable counts as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pdf_path: env_non_empty("PDF_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.pdf_path),
            output_path: env_non_empty("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            model_name: env_non_empty("AI_MODEL").unwrap_or(defaults.model_name),
            api_key: env_non_empty("AI_API_KEY"),
            local_api_url: env_non_empty("LOCAL_AI_API_URL"),
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
