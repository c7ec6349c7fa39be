//! Analysis Error Types
//!
//! This module provides upload/analysis error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Analysis-specific result type alias
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Analysis-specific error variants
///
/// Message strings are wire contract; the frontend matches on them.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Multipart body carried no `audiofile` field
    #[error("No file uploaded")]
    MissingFile,

    /// The file part had an empty filename
    #[error("No file selected")]
    EmptyFileName,

    /// Filename extension or declared MIME type is not WAV
    #[error("Only WAV files are accepted")]
    UnsupportedFileType,

    /// Upload exceeds the configured size cap
    #[error("File exceeds the {limit_bytes} byte upload limit")]
    FileTooLarge { limit_bytes: u64 },

    /// Unexpected failure while staging or reading the upload
    #[error("Processing failed: {0}")]
    Processing(String),
}

impl AnalysisError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::MissingFile
            | AnalysisError::EmptyFileName
            | AnalysisError::UnsupportedFileType
            | AnalysisError::FileTooLarge { .. } => StatusCode::BAD_REQUEST,
            AnalysisError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::MissingFile
            | AnalysisError::EmptyFileName
            | AnalysisError::UnsupportedFileType
            | AnalysisError::FileTooLarge { .. } => ErrorKind::BadRequest,
            AnalysisError::Processing(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AnalysisError::Processing(msg) => {
                tracing::error!(message = %msg, "Upload processing failure");
            }
            AnalysisError::FileTooLarge { limit_bytes } => {
                tracing::warn!(limit_bytes, "Upload rejected: over size limit");
            }
            _ => {
                tracing::debug!(error = %self, "Upload rejected");
            }
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
