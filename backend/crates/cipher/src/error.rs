//! Cipher Error Types
//!
//! This module provides cipher-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Cipher-specific result type alias
pub type CipherResult<T> = Result<T, CipherError>;

/// Cipher-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status codes
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Ciphertext or key absent or empty after trimming
    #[error("Missing cipher text or key")]
    MissingInput,

    /// Unexpected failure while running the pipeline
    #[error("Decryption failed: {0}")]
    Decryption(String),
}

impl CipherError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CipherError::MissingInput => StatusCode::BAD_REQUEST,
            CipherError::Decryption(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::MissingInput => ErrorKind::BadRequest,
            CipherError::Decryption(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CipherError::Decryption(msg) => {
                tracing::error!(message = %msg, "Cipher pipeline failure");
            }
            CipherError::MissingInput => {
                tracing::debug!(error = %self, "Decrypt request rejected");
            }
        }
    }
}

impl From<CipherError> for AppError {
    fn from(err: CipherError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for CipherError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
