use std::sync::Arc;

use crate::config::Config;
use crate::summary::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Summary backend, built once in `main` and reused by every request.
    pub summarizer: Arc<dyn Summarizer>,
}
