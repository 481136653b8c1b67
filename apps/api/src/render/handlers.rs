//! Axum route handlers for the Render API.

use axum::{
    http::{HeaderName, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::render::html::{render_value, RenderedResume};

pub const WARNINGS_HEADER: &str = "x-resume-warnings";

/// POST /api/v1/resumes/render
///
/// Renders the posted résumé payload and returns the document as `text/html`.
/// The number of field warnings is reported in `x-resume-warnings`.
pub async fn handle_render(Json(payload): Json<Value>) -> Response {
    let rendered = render_value(&payload);
    for warning in &rendered.warnings {
        debug!("Resume field warning at {}: {}", warning.field, warning.message);
    }

    let mut response = Html(rendered.html).into_response();
    response.headers_mut().insert(
        HeaderName::from_static(WARNINGS_HEADER),
        HeaderValue::from(rendered.warnings.len()),
    );
    response
}

/// POST /api/v1/resumes/render/preview
///
/// Same input as `handle_render`; returns the HTML and the warnings as JSON.
pub async fn handle_render_preview(Json(payload): Json<Value>) -> Json<RenderedResume> {
    Json(render_value(&payload))
}
