//! # gridsage: SCADA protection report analysis
//!
//! This crate reads a SCADA protection event report (PDF), extracts its text,
//! folds an excerpt of it into a protection-engineering analysis rubric, and
//! asks a configurable AI provider for the written analysis. The result is
//! saved as a plain-text report.

pub mod config;
pub mod errors;
pub mod extract;
pub mod prompts;
pub mod providers;

pub use config::AppConfig;
pub use errors::PromptError;
pub use extract::ExtractError;

use crate::prompts::analysis::{build_user_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::providers::ai::AiProvider;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors that can end an analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to extract text from the PDF: {0}")]
    Extract(#[from] ExtractError),
    #[error("LLM request failed: {0}")]
    Llm(#[from] PromptError),
    #[error("Failed to write the analysis report: {0}")]
    Write(std::io::Error),
}

/// How an analysis run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The analysis was written to `output_path`.
    Completed { output_path: PathBuf },
    /// The PDF yielded no extractable text; no request was made.
    EmptyDocument,
    /// The model returned an empty response; nothing was written.
    EmptyResponse,
}

/// Runs the extract → compose → request → write pipeline once.
///
/// The output file is only written when the provider returns a non-empty
/// response. A blank document ends the run before any request is made, and a
/// blank response ends it before anything touches the filesystem. Parent
/// directories of the output path are created as needed; an existing report
/// at that path is overwritten.
#[instrument(skip(config, ai_provider), fields(pdf = %config.pdf_path.display()))]
pub async fn run_analysis(
    config: &AppConfig,
    ai_provider: &dyn AiProvider,
) -> Result<AnalysisOutcome, AnalysisError> {
    let text = extract::extract_text(&config.pdf_path)?;
    if text.trim().is_empty() {
        warn!(
            "'{}' produced no extractable text. Aborting before the LLM call.",
            config.pdf_path.display()
        );
        return Ok(AnalysisOutcome::EmptyDocument);
    }
    info!(
        "Extracted {} characters of report text.",
        text.chars().count()
    );

    let user_prompt = build_user_prompt(&text);
    let analysis = ai_provider
        .generate(ANALYSIS_SYSTEM_PROMPT, &user_prompt)
        .await?;

    if analysis.trim().is_empty() {
        warn!("The model returned an empty analysis. Nothing was written.");
        return Ok(AnalysisOutcome::EmptyResponse);
    }

    if let Some(parent) = config.output_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(AnalysisError::Write)?;
    }
    tokio::fs::write(&config.output_path, &analysis)
        .await
        .map_err(AnalysisError::Write)?;
    info!("Analysis written to {}", config.output_path.display());

    Ok(AnalysisOutcome::Completed {
        output_path: config.output_path.clone(),
    })
}
