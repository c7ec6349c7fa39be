//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Deserializer, Serialize};

/// Request for POST /decrypt
///
/// Field names are wire contract (snake_case, as the frontend sends them).
#[derive(Debug, Clone, Deserialize)]
pub struct DecryptRequest {
    /// Declared cipher slot (`primary`, `quaternary`, ...); logged only
    #[serde(default)]
    pub cipher_type: Option<String>,
    #[serde(default)]
    pub cipher_text: String,
    #[serde(default)]
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_lenient_shift")]
    pub caesar_shift: Option<i64>,
}

/// Response for POST /decrypt
#[derive(Debug, Clone, Serialize)]
pub struct DecryptResponse {
    pub success: bool,
    pub decrypted_message: String,
    pub congratulations: bool,
    pub complexity_score: String,
    /// Empty on a solve, the fixed retry message otherwise
    pub hint: String,
}

/// Accepts integers, floats (truncated) and numeric strings; anything else
/// becomes `None` so the caller falls back to the default shift
fn deserialize_lenient_shift<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}
