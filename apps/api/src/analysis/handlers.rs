//! Axum route handlers for the screening session.
//!
//! The server holds no per-session state: the analyze response returns the
//! extracted text, and the client sends it back with the report action. Two
//! tabs against one process therefore never share document or score state.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::chart::{radar, RadarChart};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::report::generate_report;
use crate::scoring::{score, ScoreMap};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Extracted text, echoed back so the client can attach it to a later
    /// report request.
    pub resume_text: String,
    /// Extracted character count — the only signal the user gets when a
    /// document has no usable text layer.
    pub char_count: usize,
    pub scores: ScoreMap,
    /// Aggregate formatted to one decimal for the headline metric.
    pub aggregate_display: String,
    pub radar: RadarChart,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with one `file` part; the filename carries the declared
/// extension. Extraction degrades to empty text on unsupported or unreadable
/// documents, so the response always carries a complete score map and chart.
pub async fn handle_analyze(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut document: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let ext = field
                .file_name()
                .and_then(|name| Path::new(name).extension())
                .and_then(|ext| ext.to_str())
                .unwrap_or_default()
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            document = Some((ext, data.to_vec()));
        }
    }

    let (ext, data) =
        document.ok_or_else(|| AppError::Validation("missing 'file' part".to_string()))?;

    let resume_text = extract_text(&data, &ext);
    let char_count = resume_text.chars().count();
    info!("résumé parsed: {char_count} characters extracted");

    let scores = score(&resume_text);
    let radar = radar(&scores);

    Ok(Json(AnalyzeResponse {
        char_count,
        aggregate_display: scores.aggregate_display(),
        radar,
        scores,
        resume_text,
    }))
}

/// POST /api/v1/resumes/report
///
/// Validates the job description before anything leaves the process: a blank
/// JD is a user-facing warning, never an outbound completion request. A
/// completion failure is scoped to this action; the client's scoring state
/// is untouched and re-triggering the action retries.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let report = generate_report(
        &request.resume_text,
        &request.job_description,
        state.generator.as_ref(),
    )
    .await?;

    Ok(Json(ReportResponse { report }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
