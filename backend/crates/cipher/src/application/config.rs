//! Application Configuration
//!
//! Configuration for the cipher application layer.

/// Cipher application configuration
#[derive(Debug, Clone)]
pub struct CipherConfig {
    /// Caesar shift applied when the request carries no usable value
    pub default_caesar_shift: i64,
    /// Hint returned when an attempt does not solve the puzzle
    pub retry_hint: String,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            default_caesar_shift: 3,
            retry_hint: "Try different cipher types and Caesar shifts if unsuccessful."
                .to_string(),
        }
    }
}
