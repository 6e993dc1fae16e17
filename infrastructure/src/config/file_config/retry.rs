//! Retry configuration from TOML (`[retry]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw retry/back-off configuration
///
/// # Example
///
/// ```toml
/// [retry]
/// attempts_per_model = 3
/// base_delay_ms = 400     # rate limits: base * 2^attempt + jitter
/// linear_delay_ms = 250   # other failures: step * (attempt + 1)
/// max_jitter_ms = 200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    pub attempts_per_model: u32,
    pub base_delay_ms: u64,
    pub linear_delay_ms: u64,
    pub max_jitter_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            attempts_per_model: policy.attempts_per_model,
            base_delay_ms: policy.base_delay.as_millis() as u64,
            linear_delay_ms: policy.linear_delay.as_millis() as u64,
            max_jitter_ms: policy.max_jitter.as_millis() as u64,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> (RetryPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.attempts_per_model == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroAttempts,
                "retry.attempts_per_model: must be at least 1, using 1",
            ));
        }

        let policy = RetryPolicy {
            attempts_per_model: self.attempts_per_model,
            base_delay: Duration::from_millis(self.base_delay_ms),
            linear_delay: Duration::from_millis(self.linear_delay_ms),
            max_jitter: Duration::from_millis(self.max_jitter_ms),
        }
        .with_attempts_per_model(self.attempts_per_model);

        (policy, issues)
    }
}
