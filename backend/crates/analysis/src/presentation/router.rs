//! Analysis Router

use crate::application::config::AnalysisConfig;
use crate::presentation::handlers::{self, AnalysisAppState};
use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the analysis router
///
/// The body limit sits one MiB above the upload cap so multipart framing
/// never trips it before the handler's own size check does.
pub fn analysis_router(config: AnalysisConfig) -> Router {
    let body_limit = config.upload_limit_bytes as usize + 1024 * 1024;
    let state = AnalysisAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/upload",
            post(handlers::analyze_upload).layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
