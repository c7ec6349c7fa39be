//! Analyze Upload Use Case

use crate::application::config::AnalysisConfig;
use crate::domain::entities::{CipherTexts, UploadArtifact};
use crate::domain::services::{ADVANCED_HINT, ANALYSIS_HINT, FREQUENCY_PATTERN, cipher_texts};
use crate::domain::value_objects::{WavFileName, WavFileNameError, is_accepted_wav_mime};
use crate::error::{AnalysisError, AnalysisResult};
use crate::infra::spectrograms::SpectrogramSet;
use bytes::Bytes;
use chrono::{Local, Timelike};
use sha2::{Digest, Sha256};
use std::io::Write;
use std::sync::Arc;

/// Input DTO for analyze upload
#[derive(Debug, Clone)]
pub struct AnalyzeUploadInput {
    /// Client-supplied filename; `None` when the part carried no name
    pub file_name: Option<String>,
    /// Declared part MIME type, when present
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Output DTO: the full canned report
#[derive(Debug, Clone)]
pub struct AnalyzeUploadOutput {
    pub spectrograms: SpectrogramSet,
    pub ciphers: CipherTexts,
    pub frequency_data: [u8; 4],
    pub hint: &'static str,
    pub advanced_hint: &'static str,
}

/// Analyze Upload Use Case
///
/// Validates the upload, stages it to a scratch file long enough to take a
/// digest, deletes it, and assembles the canned report. The audio content
/// is never read.
pub struct AnalyzeUploadUseCase {
    config: Arc<AnalysisConfig>,
}

impl AnalyzeUploadUseCase {
    pub fn new(config: Arc<AnalysisConfig>) -> Self {
        Self { config }
    }

    pub async fn execute(&self, input: AnalyzeUploadInput) -> AnalysisResult<AnalyzeUploadOutput> {
        let file_name = match input.file_name {
            Some(name) => WavFileName::new(name).map_err(|e| match e {
                WavFileNameError::Empty => AnalysisError::EmptyFileName,
                WavFileNameError::NotWav => AnalysisError::UnsupportedFileType,
            })?,
            None => return Err(AnalysisError::EmptyFileName),
        };

        if let Some(mime) = input.content_type.as_deref() {
            if !is_accepted_wav_mime(mime) {
                tracing::debug!(mime, "Upload rejected: unrecognized part MIME type");
                return Err(AnalysisError::UnsupportedFileType);
            }
        }

        let limit = self.config.upload_limit_bytes;
        if input.data.len() as u64 > limit {
            return Err(AnalysisError::FileTooLarge { limit_bytes: limit });
        }

        let artifact = stage_and_digest(file_name, input.data).await?;

        tracing::info!(
            file_name = %artifact.file_name,
            size_bytes = artifact.size_bytes,
            sha256 = %artifact.sha256_hex(),
            "Upload staged and discarded"
        );

        let hour = Local::now().hour();
        Ok(AnalyzeUploadOutput {
            spectrograms: SpectrogramSet::encoded(),
            ciphers: cipher_texts(hour),
            frequency_data: FREQUENCY_PATTERN,
            hint: ANALYSIS_HINT,
            advanced_hint: ADVANCED_HINT,
        })
    }
}

/// Write the upload to a `.wav` temp file, digest it, and let the file go
///
/// The write is real even though the content is never analyzed: the staging
/// path mirrors the original service's temp-file handling. Runs on the
/// blocking pool; the temp file is removed when it drops.
async fn stage_and_digest(file_name: WavFileName, data: Bytes) -> AnalysisResult<UploadArtifact> {
    tokio::task::spawn_blocking(move || {
        let mut tmp = tempfile::Builder::new()
            .suffix(".wav")
            .tempfile()
            .map_err(|e| AnalysisError::Processing(e.to_string()))?;
        tmp.write_all(&data)
            .map_err(|e| AnalysisError::Processing(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(&data);
        let sha256: [u8; 32] = hasher.finalize().into();

        Ok(UploadArtifact::new(file_name, data.len() as u64, sha256))
    })
    .await
    .map_err(|e| AnalysisError::Processing(e.to_string()))?
}
