//! Retry, back-off and fallback policy for external model calls.
//!
//! The policy is pure: it decides which model an attempt uses and how
//! long to wait after a failure. Sleeping and jitter sampling belong to
//! the caller.
//!
//! # Attempt layout
//!
//! With `attempts_per_model = 3` and a fallback configured:
//!
//! | attempt | 0 | 1 | 2 | 3 | 4 | 5 |
//! |---------|---|---|---|---|---|---|
//! | model   | primary | primary | primary | fallback | fallback | fallback |

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// How a failed attempt is classified for back-off purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Provider rate limit; exponential back-off or the provider's hint
    RateLimited,
    /// Any other failure; linear back-off
    Transient,
}

/// Retry/back-off/fallback policy (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made on each model before moving to the next one
    pub attempts_per_model: u32,
    /// Base of the exponential rate-limit back-off
    pub base_delay: Duration,
    /// Step of the linear back-off for other failures
    pub linear_delay: Duration,
    /// Upper bound (exclusive) of the random jitter added to rate-limit waits
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts_per_model: 3,
            base_delay: Duration::from_millis(400),
            linear_delay: Duration::from_millis(250),
            max_jitter: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    pub fn with_attempts_per_model(mut self, attempts: u32) -> Self {
        self.attempts_per_model = attempts.max(1);
        self
    }

    /// Total number of attempts across `model_count` models
    pub fn total_attempts(&self, model_count: usize) -> u32 {
        self.attempts_per_model.max(1) * model_count.max(1) as u32
    }

    /// Index of the model used by `attempt`.
    ///
    /// Retries are exhausted on one model before moving to the next;
    /// models are never interleaved.
    pub fn model_index(&self, attempt: u32, model_count: usize) -> usize {
        let index = (attempt / self.attempts_per_model.max(1)) as usize;
        index.min(model_count.saturating_sub(1))
    }

    /// Wait before the attempt following failed `attempt`.
    ///
    /// `retry_after` is the provider's hint (rate limits only); `jitter`
    /// is a caller-sampled value, clamped below `max_jitter`.
    pub fn delay_after(
        &self,
        attempt: u32,
        kind: FailureKind,
        retry_after: Option<Duration>,
        jitter: Duration,
    ) -> Duration {
        match kind {
            FailureKind::RateLimited => retry_after.unwrap_or_else(|| {
                let ceiling = self.max_jitter.saturating_sub(Duration::from_millis(1));
                self.base_delay
                    .saturating_mul(2u32.saturating_pow(attempt))
                    .saturating_add(jitter.min(ceiling))
            }),
            FailureKind::Transient => self.linear_delay.saturating_mul(attempt.saturating_add(1)),
        }
    }
}

static RETRY_AFTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)try again in (?:(\d+)m)?([0-9.]+)(ms|s)\b")
        .expect("retry-after pattern is valid")
});

/// Parse a "try again in N s" hint from a rate-limit error body.
///
/// Understands `1.5s`, `1m2.5s` and `560ms`; fractional milliseconds
/// round up.
pub fn parse_retry_after(body: &str) -> Option<Duration> {
    let caps = RETRY_AFTER.captures(body)?;
    let minutes: f64 = match caps.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0.0,
    };
    let amount: f64 = caps.get(2)?.as_str().parse().ok()?;
    let unit_millis = if caps.get(3)?.as_str().eq_ignore_ascii_case("ms") {
        amount
    } else {
        amount * 1000.0
    };
    let millis = unit_millis + minutes * 60_000.0;

    if !millis.is_finite() || millis < 0.0 {
        return None;
    }
    Some(Duration::from_millis(millis.ceil() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_attempts_with_fallback() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.total_attempts(1), 3);
        assert_eq!(policy.total_attempts(2), 6);
    }

    #[test]
    fn test_fallback_only_after_primary_exhausted() {
        let policy = RetryPolicy::default();
        let models: Vec<usize> = (0..6).map(|a| policy.model_index(a, 2)).collect();
        assert_eq!(models, vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_model_index_clamped_without_fallback() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.model_index(5, 1), 0);
    }

    #[test]
    fn test_rate_limit_uses_hint() {
        let policy = RetryPolicy::default();
        let delay = policy.delay_after(
            4,
            FailureKind::RateLimited,
            Some(Duration::from_millis(1500)),
            Duration::from_millis(150),
        );
        assert_eq!(delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_rate_limit_exponential_with_jitter() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.delay_after(0, FailureKind::RateLimited, None, Duration::ZERO),
            Duration::from_millis(400)
        );
        assert_eq!(
            policy.delay_after(2, FailureKind::RateLimited, None, Duration::from_millis(50)),
            Duration::from_millis(1650)
        );
        // Jitter is clamped below the configured maximum
        assert_eq!(
            policy.delay_after(0, FailureKind::RateLimited, None, Duration::from_secs(5)),
            Duration::from_millis(599)
        );
    }

    #[test]
    fn test_transient_linear() {
        let policy = RetryPolicy::default();
        let delays: Vec<_> = (0..3)
            .map(|a| policy.delay_after(a, FailureKind::Transient, None, Duration::ZERO))
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(250),
                Duration::from_millis(500),
                Duration::from_millis(750)
            ]
        );
    }

    #[test]
    fn test_transient_ignores_hint() {
        let policy = RetryPolicy::default();
        let delay = policy.delay_after(
            0,
            FailureKind::Transient,
            Some(Duration::from_secs(9)),
            Duration::ZERO,
        );
        assert_eq!(delay, Duration::from_millis(250));
    }

    #[test]
    fn test_parse_retry_after() {
        let body = r#"{"error":{"message":"Rate limit reached. Please try again in 1.5s."}}"#;
        assert_eq!(parse_retry_after(body), Some(Duration::from_millis(1500)));
        assert_eq!(
            parse_retry_after("Please try again in 2.0001s"),
            Some(Duration::from_millis(2001))
        );
        assert_eq!(
            parse_retry_after("Please try again in 560ms"),
            Some(Duration::from_millis(560))
        );
        assert_eq!(
            parse_retry_after("Please try again in 1m2.5s"),
            Some(Duration::from_millis(62_500))
        );
        assert_eq!(
            parse_retry_after("try again in 0s"),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_parse_retry_after_absent() {
        assert_eq!(parse_retry_after("Too many requests"), None);
        assert_eq!(parse_retry_after(""), None);
        assert_eq!(parse_retry_after("try again in .s"), None);
    }

    #[test]
    fn test_attempts_floor_at_one() {
        let policy = RetryPolicy::default().with_attempts_per_model(0);
        assert_eq!(policy.attempts_per_model, 1);
        assert_eq!(policy.total_attempts(2), 2);
    }
}
