use crate::ErrorResult;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Network-level failure raised before any HTTP status was obtained.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    timeout: bool,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    /// Creates a transport error with a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timeout: false,
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            message: message.into(),
            timeout: false,
            source: Some(source.into()),
        }
    }

    /// Marks the failure as a timeout.
    pub fn timed_out(mut self) -> Self {
        self.timeout = true;
        self
    }

    /// Returns `true` when the request did not complete in time.
    pub fn is_timeout(&self) -> bool {
        self.timeout
    }
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum SpotifyError {
    /// Network or request execution failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// Non-success HTTP status after the retry policy gave up.
    #[error("api error {}: {}", .0.status, .0.message)]
    Api(ErrorResult),
    /// Response body could not be decoded into the expected shape.
    #[error("malformed response (status {status}): {message}")]
    MalformedResponse { status: u16, message: String },
    /// Request could not be assembled locally.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The cancellation token fired while the call was suspended.
    #[error("request cancelled")]
    Cancelled,
}

impl SpotifyError {
    /// HTTP status attached to the error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(result) => Some(result.status),
            Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
