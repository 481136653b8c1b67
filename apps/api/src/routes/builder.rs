//! Step-dispatched endpoint used by the web front end's résumé wizard.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::render::html::render_value;
use crate::state::AppState;
use crate::summary::handlers::summarize;

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum BuilderRequest {
    Summary {
        work_experience_text: String,
    },
    GenerateHtml {
        #[serde(default)]
        resume_data: Value,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BuilderResponse {
    Summary { summary: String },
    Html { html: String },
}

/// POST /api/resume-builder
///
/// `{"step": "summary", "work_experience_text": ...}` → `{"summary": ...}`
/// `{"step": "generate-html", "resume_data": {...}}` → `{"html": ...}`
pub async fn handle_resume_builder(
    State(state): State<AppState>,
    Json(request): Json<BuilderRequest>,
) -> Result<Json<BuilderResponse>, AppError> {
    let response = match request {
        BuilderRequest::Summary {
            work_experience_text,
        } => BuilderResponse::Summary {
            summary: summarize(&state, &work_experience_text).await?.summary,
        },
        BuilderRequest::GenerateHtml { resume_data } => BuilderResponse::Html {
            html: render_value(&resume_data).html,
        },
    };
    Ok(Json(response))
}
