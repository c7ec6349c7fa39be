//! Cipher Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Decryption pipeline, scoring heuristic, value objects
//! - `application/` - Use cases
//! - `presentation/` - HTTP handlers
//!
//! ## Puzzle Model
//! - Decryption is a fixed Caesar-then-Vigenère pipeline over the 26-letter alphabet
//! - "Solved" is a heuristic over marker substrings and a keyword allow-list,
//!   not a cryptographic check
//! - Everything is request-scoped; the pipeline is pure and keeps no state

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CipherConfig;
pub use error::{CipherError, CipherResult};
pub use presentation::router::cipher_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
