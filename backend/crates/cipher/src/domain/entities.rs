//! Domain Entities
//!
//! Core business entities for the cipher domain.

use crate::domain::value_objects::Complexity;

/// Decryption entity - the outcome of running the pipeline for one request
#[derive(Debug, Clone)]
pub struct Decryption {
    pub message: String,
    pub solved: bool,
}

impl Decryption {
    /// Create a new decryption outcome
    pub fn new(message: String, solved: bool) -> Self {
        Self { message, solved }
    }

    /// Complexity grade reported to the client
    pub fn complexity(&self) -> Complexity {
        if self.solved {
            Complexity::High
        } else {
            Complexity::Partial
        }
    }
}
