//! Retry decisions for failed HTTP attempts.
//!
//! The policy is a pure function of the configuration, the status of the
//! last attempt, how much of the budget has been used and the service's
//! `Retry-After` hint. Sleeping and re-sending is the executor's job.

use std::collections::BTreeSet;
use std::time::Duration;

/// HTTP 429.
pub const TOO_MANY_REQUESTS: u16 = 429;
/// HTTP 503.
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// Automatic retry settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Master switch for automatic retries.
    pub enabled: bool,
    /// Delay before a retry when the service gives no usable hint.
    pub retry_after_ms: u64,
    /// Retry budget: additional attempts allowed after the first failure.
    pub max_attempts: u32,
    /// Statuses that trigger a retry.
    pub retryable_status_codes: BTreeSet<u16>,
    /// Whether a 429 response uses up one unit of the retry budget.
    pub too_many_requests_consumes_attempt: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            retry_after_ms: 50,
            max_attempts: 10,
            retryable_status_codes: [500, 502, 503, 504].into_iter().collect(),
            too_many_requests_consumes_attempt: false,
        }
    }
}

impl RetryConfig {
    /// Enabled configuration with the default status set.
    pub fn enabled(max_attempts: u32, retry_after_ms: u64) -> Self {
        Self {
            enabled: true,
            retry_after_ms,
            max_attempts,
            ..Self::default()
        }
    }

    /// Adds 429 to the retryable set.
    pub fn with_too_many_requests(mut self, consumes_attempt: bool) -> Self {
        self.retryable_status_codes.insert(TOO_MANY_REQUESTS);
        self.too_many_requests_consumes_attempt = consumes_attempt;
        self
    }
}

/// Outcome of consulting the policy after a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Sleep for `delay`, then resend the same request.
    Retry {
        delay: Duration,
        consumes_attempt: bool,
    },
    /// Give up; the failure becomes terminal.
    Stop,
}

/// Borrowed view over a [`RetryConfig`] snapshot.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy<'a> {
    config: &'a RetryConfig,
}

impl<'a> RetryPolicy<'a> {
    pub fn new(config: &'a RetryConfig) -> Self {
        Self { config }
    }

    /// Decides what to do after an attempt that failed with `status`.
    ///
    /// `consumed` is the number of budget units already spent on this
    /// logical request. `retry_after` is the raw `Retry-After` header value.
    pub fn decide(&self, status: u16, consumed: u32, retry_after: Option<&str>) -> RetryDecision {
        let config = self.config;
        if !config.enabled
            || consumed >= config.max_attempts
            || !config.retryable_status_codes.contains(&status)
        {
            return RetryDecision::Stop;
        }

        let consumes_attempt =
            status != TOO_MANY_REQUESTS || config.too_many_requests_consumes_attempt;

        RetryDecision::Retry {
            delay: self.delay_for(status, retry_after),
            consumes_attempt,
        }
    }

    fn delay_for(&self, status: u16, retry_after: Option<&str>) -> Duration {
        let hinted = match status {
            TOO_MANY_REQUESTS | SERVICE_UNAVAILABLE => retry_after.and_then(parse_retry_after),
            _ => None,
        };
        hinted.unwrap_or_else(|| Duration::from_millis(self.config.retry_after_ms))
    }
}

/// Parses a `Retry-After` value given in whole seconds.
///
/// Zero, negative, fractional and HTTP-date values are treated as absent.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    let seconds = value.trim().parse::<u64>().ok()?;
    (seconds > 0).then(|| Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{parse_retry_after, RetryConfig, RetryDecision, RetryPolicy};

    fn delay(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn disabled_policy_never_retries() {
        let config = RetryConfig::default();
        let policy = RetryPolicy::new(&config);
        assert_eq!(policy.decide(500, 0, None), RetryDecision::Stop);
    }

    #[test]
    fn retryable_status_within_budget_retries_with_configured_delay() {
        let config = RetryConfig::enabled(3, 75);
        let policy = RetryPolicy::new(&config);
        assert_eq!(
            policy.decide(502, 2, None),
            RetryDecision::Retry {
                delay: delay(75),
                consumes_attempt: true
            }
        );
    }

    #[test]
    fn exhausted_budget_stops() {
        let config = RetryConfig::enabled(3, 75);
        let policy = RetryPolicy::new(&config);
        assert_eq!(policy.decide(502, 3, None), RetryDecision::Stop);
    }

    #[test]
    fn non_retryable_status_stops() {
        let config = RetryConfig::enabled(3, 75);
        let policy = RetryPolicy::new(&config);
        assert_eq!(policy.decide(404, 0, None), RetryDecision::Stop);
        assert_eq!(policy.decide(429, 0, None), RetryDecision::Stop);
    }

    #[test]
    fn too_many_requests_is_free_unless_configured() {
        let free = RetryConfig::enabled(3, 75).with_too_many_requests(false);
        let paid = RetryConfig::enabled(3, 75).with_too_many_requests(true);

        assert!(matches!(
            RetryPolicy::new(&free).decide(429, 0, None),
            RetryDecision::Retry {
                consumes_attempt: false,
                ..
            }
        ));
        assert!(matches!(
            RetryPolicy::new(&paid).decide(429, 0, None),
            RetryDecision::Retry {
                consumes_attempt: true,
                ..
            }
        ));
    }

    #[test]
    fn retry_after_hint_wins_for_429_and_503_only() {
        let config = RetryConfig::enabled(3, 75).with_too_many_requests(true);
        let policy = RetryPolicy::new(&config);

        for status in [429, 503] {
            match policy.decide(status, 0, Some("2")) {
                RetryDecision::Retry { delay: d, .. } => assert_eq!(d, Duration::from_secs(2)),
                RetryDecision::Stop => panic!("expected retry for {status}"),
            }
        }
        match policy.decide(500, 0, Some("2")) {
            RetryDecision::Retry { delay: d, .. } => assert_eq!(d, delay(75)),
            RetryDecision::Stop => panic!("expected retry for 500"),
        }
    }

    #[test]
    fn unusable_retry_after_falls_back_to_configured_delay() {
        let config = RetryConfig::enabled(3, 75);
        let policy = RetryPolicy::new(&config);
        for hint in ["0", "-3", "1.5", "soon", "Wed, 21 Oct 2015 07:28:00 GMT", ""] {
            match policy.decide(503, 0, Some(hint)) {
                RetryDecision::Retry { delay: d, .. } => assert_eq!(d, delay(75), "hint {hint:?}"),
                RetryDecision::Stop => panic!("expected retry"),
            }
        }
    }

    #[test]
    fn parse_retry_after_accepts_whole_seconds() {
        assert_eq!(parse_retry_after(" 4 "), Some(Duration::from_secs(4)));
        assert_eq!(parse_retry_after("0"), None);
    }
}
