//! Payloads of the string-analysis endpoint.

use serde::{Deserialize, Serialize};

/// Text returned in `vogal` when no character satisfies the scan.
pub const NO_VOWEL_FOUND: &str = "Nenhuma vogal encontrada com os critérios.";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzeStringRequest {
    /// Absent and `null` are both read as the empty string.
    #[serde(default)]
    pub string: Option<String>,
}

impl AnalyzeStringRequest {
    pub fn into_input(self) -> String {
        self.string.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeStringResponse {
    pub string: String,
    pub vogal: String,
    /// Elapsed scan time formatted as `"<millis>ms"`.
    #[serde(rename = "tempoTotal")]
    pub total_time: String,
}
