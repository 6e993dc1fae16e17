//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod models;
mod output;
mod provider;
mod retry;
mod server;

pub use debate::FileDebateConfig;
pub use models::{FileModelsConfig, FileRoleModels};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;
pub use retry::FileRetryConfig;
pub use server::FileServerConfig;

use council_application::CouncilConfig;
use council_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Per-role model selection
    pub models: FileModelsConfig,
    /// Retry/back-off policy for model calls
    pub retry: FileRetryConfig,
    /// Model provider endpoint and credential
    pub provider: FileProviderConfig,
    /// Intake and debate behavior
    pub debate: FileDebateConfig,
    /// HTTP binding
    pub server: FileServerConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Empty model names across all roles and fallbacks
    /// 2. Zero attempts in the retry policy
    /// 3. Enum parse failures (debate dispatch)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.to_council_config().1
    }

    /// Build the application configuration, collecting issues on the way.
    ///
    /// Invalid values never abort the conversion; the default for the
    /// offending field is used instead.
    pub fn to_council_config(&self) -> (CouncilConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (roster, roster_issues) = self.models.to_roster();
        issues.extend(roster_issues);

        let (retry, retry_issues) = self.retry.to_policy();
        issues.extend(retry_issues);

        let (dispatch, dispatch_issues) = self.debate.parse_dispatch();
        issues.extend(dispatch_issues);

        let config = CouncilConfig::new(roster, retry, self.debate.intake_policy(), dispatch);
        (config, issues)
    }
}
