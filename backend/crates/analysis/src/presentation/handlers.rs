//! HTTP Handlers

use crate::application::analyze_upload::{AnalyzeUploadInput, AnalyzeUploadUseCase};
use crate::application::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::presentation::dto::AnalysisResponse;
use axum::Json;
use axum::extract::{Multipart, State};
use bytes::{Bytes, BytesMut};
use std::sync::Arc;

/// Shared state for analysis handlers
#[derive(Clone)]
pub struct AnalysisAppState {
    pub config: Arc<AnalysisConfig>,
}

/// POST /upload
///
/// Reads the `audiofile` multipart part in chunks, enforcing the size cap
/// incrementally so an oversized upload is cut off as soon as it crosses
/// the limit.
pub async fn analyze_upload(
    State(state): State<AnalysisAppState>,
    mut multipart: Multipart,
) -> AnalysisResult<Json<AnalysisResponse>> {
    let limit = state.config.upload_limit_bytes;
    let mut upload: Option<AnalyzeUploadInput> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalysisError::Processing(e.to_string()))?
    {
        if field.name() != Some("audiofile") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let mut data = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AnalysisError::Processing(e.to_string()))?
        {
            if (data.len() + chunk.len()) as u64 > limit {
                return Err(AnalysisError::FileTooLarge { limit_bytes: limit });
            }
            data.extend_from_slice(&chunk);
        }

        upload = Some(AnalyzeUploadInput {
            file_name,
            content_type,
            data: Bytes::from(data),
        });
        break;
    }

    let input = upload.ok_or(AnalysisError::MissingFile)?;

    let use_case = AnalyzeUploadUseCase::new(state.config.clone());
    let output = use_case.execute(input).await?;

    Ok(Json(AnalysisResponse::from(output)))
}
