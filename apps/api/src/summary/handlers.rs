//! Axum route handlers for the Summary API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::record::record_from_value;
use crate::state::AppState;
use crate::summary::{experience_digest, summarize_experience, ExperienceSummary};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either free text, or a résumé payload whose experiences are digested
/// into text. Free text wins when both are given.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub work_experience_text: Option<String>,
    pub resume_data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub raw_summary: String,
    pub backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/summaries
///
/// Summarizes work experience into a first-person paragraph.
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let text = match (request.work_experience_text, request.resume_data) {
        (Some(text), _) => text,
        (None, Some(resume_data)) => experience_digest(&record_from_value(&resume_data).0),
        (None, None) => {
            return Err(AppError::Validation(
                "work_experience_text or resume_data is required".to_string(),
            ))
        }
    };

    let ExperienceSummary {
        summary,
        raw_summary,
    } = summarize(&state, &text).await?;

    Ok(Json(SummaryResponse {
        summary,
        raw_summary,
        backend: state.summarizer.backend().to_string(),
    }))
}

/// Shared by every endpoint that produces a summary.
pub async fn summarize(state: &AppState, text: &str) -> Result<ExperienceSummary, AppError> {
    let summary = summarize_experience(
        state.summarizer.as_ref(),
        text,
        state.config.summary_max_input_words,
    )
    .await?;
    Ok(summary)
}
