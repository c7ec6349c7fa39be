//! Domain Entities
//!
//! Core business entities for the analysis domain.

use crate::domain::value_objects::WavFileName;

/// UploadArtifact entity - what remains of an upload after staging
///
/// The file itself is deleted as soon as the digest is taken; the artifact
/// carries only the facts worth logging.
#[derive(Debug, Clone)]
pub struct UploadArtifact {
    pub file_name: WavFileName,
    pub size_bytes: u64,
    pub sha256: [u8; 32],
}

impl UploadArtifact {
    pub fn new(file_name: WavFileName, size_bytes: u64, sha256: [u8; 32]) -> Self {
        Self {
            file_name,
            size_bytes,
            sha256,
        }
    }

    /// Lowercase hex rendering of the digest, for the structured log
    pub fn sha256_hex(&self) -> String {
        self.sha256.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// CipherTexts entity - the canned cipher set returned for every upload
///
/// Only `quaternary` varies, keyed by the server's local hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherTexts {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub quaternary: String,
}
