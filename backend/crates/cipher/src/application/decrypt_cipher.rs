//! Decrypt Cipher Use Case

use crate::application::config::CipherConfig;
use crate::domain::entities::Decryption;
use crate::domain::services::{decrypt, is_solved};
use crate::domain::value_objects::{CaesarShift, CipherKey};
use crate::error::{CipherError, CipherResult};
use std::sync::Arc;

/// Input DTO for decrypt cipher
#[derive(Debug, Clone)]
pub struct DecryptCipherInput {
    pub cipher_text: String,
    pub key: String,
    /// Already-coerced shift; `None` means the request carried no usable value
    pub caesar_shift: Option<i64>,
    /// Client-declared cipher type; recorded in the log, never interpreted
    pub cipher_type: Option<String>,
}

/// Decrypt Cipher Use Case
pub struct DecryptCipherUseCase {
    config: Arc<CipherConfig>,
}

impl DecryptCipherUseCase {
    pub fn new(config: Arc<CipherConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: DecryptCipherInput) -> CipherResult<Decryption> {
        if input.cipher_text.trim().is_empty() {
            return Err(CipherError::MissingInput);
        }
        let key = CipherKey::new(&input.key).map_err(|_| CipherError::MissingInput)?;

        let shift = input
            .caesar_shift
            .map(CaesarShift::new)
            .unwrap_or_else(|| CaesarShift::new(self.config.default_caesar_shift));

        if let Some(cipher_type) = input.cipher_type.as_deref() {
            tracing::debug!(cipher_type, "Client-declared cipher type (not interpreted)");
        }

        // The ciphertext goes through as sent; surrounding whitespace is a
        // non-letter like any other
        let message = decrypt(&input.cipher_text, key.as_str(), shift.amount());
        let solved = is_solved(&message, key.as_str());

        tracing::info!(
            cipher_text_len = input.cipher_text.len(),
            caesar_shift = shift.amount(),
            solved,
            "Decryption attempt completed"
        );

        Ok(Decryption::new(message, solved))
    }
}
