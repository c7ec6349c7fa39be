//! Cipher Router

use crate::application::config::CipherConfig;
use crate::presentation::handlers::{self, CipherAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the cipher router
pub fn cipher_router(config: CipherConfig) -> Router {
    let state = CipherAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/decrypt", post(handlers::decrypt_cipher))
        .with_state(state)
}
