//! API DTOs (Data Transfer Objects)

use crate::application::analyze_upload::AnalyzeUploadOutput;
use serde::Serialize;

/// Response for POST /upload
///
/// Field names are wire contract (snake_case, as the frontend expects them).
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub spectrograms: SpectrogramsDto,
    pub ciphers: CiphersDto,
    pub frequency_data: Vec<u8>,
    pub hint: String,
    pub advanced_hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpectrogramsDto {
    pub primary: String,
    pub high_res: String,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CiphersDto {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub quaternary: String,
}

impl From<AnalyzeUploadOutput> for AnalysisResponse {
    fn from(output: AnalyzeUploadOutput) -> Self {
        Self {
            success: true,
            spectrograms: SpectrogramsDto {
                primary: output.spectrograms.primary,
                high_res: output.spectrograms.high_res,
                phase: output.spectrograms.phase,
            },
            ciphers: CiphersDto {
                primary: output.ciphers.primary,
                secondary: output.ciphers.secondary,
                tertiary: output.ciphers.tertiary,
                quaternary: output.ciphers.quaternary,
            },
            frequency_data: output.frequency_data.to_vec(),
            hint: output.hint.to_string(),
            advanced_hint: output.advanced_hint.to_string(),
        }
    }
}
