use std::fmt;

use crate::RetryConfig;

/// Default root of the Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Configures endpoint root, HTTP timeout and retry behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Root URL that relative endpoint paths are joined onto.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Initial retry configuration. Can be changed later through the client.
    pub retry: RetryConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: 10_000,
            retry: RetryConfig::default(),
        }
    }
}

/// Access token used to build the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Token scheme, usually `Bearer`.
    pub token_type: String,
    /// Token issued by the accounts service.
    pub access_token: String,
    /// When `false` no `Authorization` header is sent.
    pub use_auth: bool,
}

impl Credentials {
    /// Bearer credentials with authentication enabled.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            token_type: "Bearer".to_owned(),
            access_token: access_token.into(),
            use_auth: true,
        }
    }

    /// Credentials that never attach an `Authorization` header.
    pub fn anonymous() -> Self {
        Self {
            token_type: "Bearer".to_owned(),
            access_token: String::new(),
            use_auth: false,
        }
    }

    pub(crate) fn authorization(&self) -> Option<String> {
        self.use_auth
            .then(|| format!("{} {}", self.token_type.trim(), self.access_token.trim()))
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("use_auth", &self.use_auth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn authorization_joins_type_and_token() {
        let creds = Credentials::bearer("abc123");
        assert_eq!(creds.authorization().as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn authorization_absent_without_auth() {
        let mut creds = Credentials::bearer("abc123");
        creds.use_auth = false;
        assert!(creds.authorization().is_none());
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", Credentials::bearer("secret-token"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }
}
