use serde::Deserialize;

/// Error body returned by the Web API: `{"error": {"status", "message"}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    #[allow(dead_code)]
    Detailed {
        #[serde(default)]
        status: Option<u16>,
        #[serde(default)]
        message: String,
    },
    /// Accounts-style errors carry a bare code plus a description.
    Code(String),
}
