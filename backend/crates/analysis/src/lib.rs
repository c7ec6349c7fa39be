//! Analysis Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Upload artifact, canned cipher set, value objects
//! - `application/` - Use cases
//! - `infra/` - Embedded spectrogram assets
//! - `presentation/` - HTTP handlers
//!
//! ## Puzzle Model
//! - The "analysis" of an uploaded WAV is entirely canned: fixed spectrogram
//!   placeholders, fixed ciphers (one hour-keyed), a fixed frequency pattern
//! - The upload is staged to a temp file and deleted; only its SHA-256 digest
//!   is recorded, never its audio content
//! - Everything is request-scoped; nothing is persisted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use presentation::router::analysis_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
