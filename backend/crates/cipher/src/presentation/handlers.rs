//! HTTP Handlers

use crate::application::config::CipherConfig;
use crate::application::decrypt_cipher::{DecryptCipherInput, DecryptCipherUseCase};
use crate::error::CipherResult;
use crate::presentation::dto::{DecryptRequest, DecryptResponse};
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

/// Shared state for cipher handlers
#[derive(Clone)]
pub struct CipherAppState {
    pub config: Arc<CipherConfig>,
}

/// POST /decrypt
pub async fn decrypt_cipher(
    State(state): State<CipherAppState>,
    Json(req): Json<DecryptRequest>,
) -> CipherResult<Json<DecryptResponse>> {
    let use_case = DecryptCipherUseCase::new(state.config.clone());

    let input = DecryptCipherInput {
        cipher_text: req.cipher_text,
        key: req.key,
        caesar_shift: req.caesar_shift,
        cipher_type: req.cipher_type,
    };

    let decryption = use_case.execute(input)?;
    let complexity = decryption.complexity();

    let hint = if decryption.solved {
        String::new()
    } else {
        state.config.retry_hint.clone()
    };

    Ok(Json(DecryptResponse {
        success: true,
        decrypted_message: decryption.message,
        congratulations: decryption.solved,
        complexity_score: complexity.as_str().to_string(),
        hint,
    }))
}
