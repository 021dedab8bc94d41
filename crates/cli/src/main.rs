//! # gridsage-cli
//!
//! Command-line entry point: reads the configured PDF event report, asks the
//! configured model for a protection analysis, and saves the result as a
//! plain-text report.

use anyhow::Result;
use gridsage::providers::factory::create_provider;
use gridsage::{run_analysis, AnalysisError, AnalysisOutcome, AppConfig};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_env();

    // Provider misconfiguration (e.g. a missing API key) is reported the
    // same way as a failed request: a message, no report, a clean exit.
    let provider = match create_provider(&config) {
        Ok(provider) => provider,
        Err(e) => {
            println!("No LLM output was obtained: {e}");
            return Ok(());
        }
    };

    println!("Reading PDF data from {}...", config.pdf_path.display());
    println!("Starting LLM analysis ({})...", config.model_name);

    match run_analysis(&config, provider.as_ref()).await {
        Ok(AnalysisOutcome::Completed { output_path }) => {
            println!("Analysis complete. Saved to: {}", output_path.display());
        }
        Ok(AnalysisOutcome::EmptyDocument) => {
            println!("The PDF content is empty or could not be read.");
        }
        Ok(AnalysisOutcome::EmptyResponse) => {
            println!("No LLM output was obtained.");
        }
        Err(AnalysisError::Llm(e)) => {
            println!("No LLM output was obtained: {e}");
        }
        // Missing or corrupt input and write failures are hard errors.
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
