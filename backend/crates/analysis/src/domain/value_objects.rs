//! Domain Value Objects
//!
//! Immutable value types for the analysis domain.

use std::fmt;

/// MIME types a client may declare for a WAV part
///
/// `application/octet-stream` is accepted because curl and similar CLI
/// clients send it for any file; the extension check still applies.
pub const ACCEPTED_WAV_MIME_TYPES: &[&str] = &[
    "audio/wav",
    "audio/x-wav",
    "audio/wave",
    "application/octet-stream",
];

/// Error returned when filename validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WavFileNameError {
    /// Filename is empty
    Empty,
    /// Filename does not end in `.wav` (case-insensitive)
    NotWav,
}

impl fmt::Display for WavFileNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Filename cannot be empty"),
            Self::NotWav => write!(f, "Filename must end in .wav"),
        }
    }
}

impl std::error::Error for WavFileNameError {}

/// Validated WAV filename
///
/// # Invariants
/// - Non-empty
/// - Ends in `.wav`, compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFileName(String);

impl WavFileName {
    /// Create a new WavFileName from the client-supplied name
    pub fn new(input: impl Into<String>) -> Result<Self, WavFileNameError> {
        let name = input.into();
        if name.is_empty() {
            return Err(WavFileNameError::Empty);
        }
        if !name.to_lowercase().ends_with(".wav") {
            return Err(WavFileNameError::NotWav);
        }
        Ok(Self(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WavFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WavFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether a declared part MIME type is acceptable for a WAV upload
pub fn is_accepted_wav_mime(mime: &str) -> bool {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    ACCEPTED_WAV_MIME_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(essence))
}
