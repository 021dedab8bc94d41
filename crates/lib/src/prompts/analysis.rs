//! Prompts for the protection-engineering analysis task.

/// The system prompt framing the analysis: persona, rubric, and the exact
/// output format the report should follow.
pub const ANALYSIS_SYSTEM_PROMPT: &str = include_str!("analysis_system.md");

/// Maximum number of characters of extracted text submitted for analysis.
pub const MAX_EXCERPT_CHARS: usize = 4000;

/// Builds the user prompt from the extracted report text.
///
/// At most the first [`MAX_EXCERPT_CHARS`] characters are kept; shorter input
/// passes through unchanged.
pub fn build_user_prompt(extracted_text: &str) -> String {
    let excerpt: String = extracted_text.chars().take(MAX_EXCERPT_CHARS).collect();
    format!("SCADA Data Sample:\n\"\"\"\n{excerpt}\n\"\"\"")
}
