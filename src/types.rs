use serde::{Deserialize, Serialize};

/// Uniform acknowledgement for mutating calls and report for terminal failures.
///
/// A successful mutation yields the response status with an empty message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

impl ErrorResult {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Acknowledgement for a successful call.
    pub fn ok(status: u16) -> Self {
        Self::new(status, "")
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    pub fn has_error(&self) -> bool {
        !self.is_success()
    }
}
