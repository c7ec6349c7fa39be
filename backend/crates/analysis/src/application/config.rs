//! Application Configuration
//!
//! Configuration for the analysis application layer.

/// Analysis application configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Maximum accepted upload size in bytes
    pub upload_limit_bytes: u64,
}

impl AnalysisConfig {
    /// Default upload cap: 50MB, the original service's limit
    pub const DEFAULT_UPLOAD_LIMIT_BYTES: u64 = 50 * 1024 * 1024;
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            upload_limit_bytes: Self::DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }
}
