//! Report requester — builds the candidate-report prompt and performs the
//! single outbound completion call.
//!
//! The response is opaque narrative text: nothing here parses or validates
//! what the model returns. It is handed back for direct display.

pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::report::prompts::REPORT_PROMPT_TEMPLATE;

/// Résumé prefix included in the prompt, in characters. Bounds the request
/// size; the instruction template and the job description are never cut.
pub const RESUME_PREFIX_CHARS: usize = 2000;

/// Truncates to at most `limit` characters, never splitting a character.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the full report prompt from résumé text and job description.
pub fn build_prompt(resume_text: &str, jd_text: &str) -> String {
    REPORT_PROMPT_TEMPLATE
        .replace("{resume}", truncate_chars(resume_text, RESUME_PREFIX_CHARS))
        .replace("{jd}", jd_text)
}

/// Requests the narrative candidate report.
///
/// Single-shot: one request, one response, no retry. The caller surfaces a
/// failure for this action only; scoring state is unaffected and the user
/// retries by re-triggering the action.
pub async fn generate_report(
    resume_text: &str,
    jd_text: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = build_prompt(resume_text, jd_text);
    generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Report generation failed: {e}")))
}
