//! Intake/debate configuration from TOML (`[debate]` section)

use council_domain::{ConfigIssue, ConfigIssueCode, DispatchMode, IntakePolicy};
use serde::{Deserialize, Serialize};

/// Raw intake/debate configuration
///
/// # Example
///
/// ```toml
/// [debate]
/// dispatch = "sequential"   # or "concurrent"
/// question_limit = 2        # intake turns before a default brief is proposed
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub dispatch: String,
    pub question_limit: u64,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            dispatch: DispatchMode::default().as_str().to_string(),
            question_limit: IntakePolicy::default().question_limit,
        }
    }
}

impl FileDebateConfig {
    /// Parse dispatch string into DispatchMode enum
    pub fn parse_dispatch(&self) -> (DispatchMode, Vec<ConfigIssue>) {
        match self.dispatch.parse::<DispatchMode>() {
            Ok(mode) => (mode, Vec::new()),
            Err(_) => (
                DispatchMode::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "debate.dispatch".to_string(),
                        value: self.dispatch.clone(),
                        valid_values: DispatchMode::VALID_VALUES
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "debate.dispatch: unknown value '{}', falling back to '{}'",
                        self.dispatch,
                        DispatchMode::default()
                    ),
                )],
            ),
        }
    }

    pub fn intake_policy(&self) -> IntakePolicy {
        IntakePolicy {
            question_limit: self.question_limit,
        }
    }
}
