//! Per-role model configuration from TOML (`[models]` section)

use council_domain::{AgentRole, ConfigIssue, ConfigIssueCode, Model, ModelRoster, ModelRoute};
use serde::{Deserialize, Serialize};

/// One optional model id per role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoleModels {
    pub facilitator: Option<String>,
    pub coach: Option<String>,
    pub tech: Option<String>,
    pub biz: Option<String>,
    pub data: Option<String>,
    pub guard: Option<String>,
}

impl FileRoleModels {
    fn get(&self, role: AgentRole) -> Option<&String> {
        match role {
            AgentRole::Facilitator => self.facilitator.as_ref(),
            AgentRole::Coach => self.coach.as_ref(),
            AgentRole::Tech => self.tech.as_ref(),
            AgentRole::Biz => self.biz.as_ref(),
            AgentRole::Data => self.data.as_ref(),
            AgentRole::Guard => self.guard.as_ref(),
        }
    }
}

/// Per-role model configuration from TOML
///
/// Unset roles keep the built-in roster.
///
/// # Example
///
/// ```toml
/// [models]
/// facilitator = "llama-3.1-8b-instant"
/// coach = "groq/compound"
/// data = "openai/gpt-oss-120b"
///
/// [models.fallbacks]
/// data = "openai/gpt-oss-20b"   # used once the primary's attempts are spent
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    #[serde(flatten)]
    pub primary: FileRoleModels,
    pub fallbacks: FileRoleModels,
}

const ROLES: [AgentRole; 6] = [
    AgentRole::Facilitator,
    AgentRole::Coach,
    AgentRole::Tech,
    AgentRole::Biz,
    AgentRole::Data,
    AgentRole::Guard,
];

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }

    /// Overlay the configured models on the built-in roster.
    pub fn to_roster(&self) -> (ModelRoster, Vec<ConfigIssue>) {
        let mut roster = ModelRoster::default();
        let mut issues = Vec::new();

        for role in ROLES {
            let mut route = roster.route(role).clone();

            let (primary, primary_issues) = Self::parse_single_model(
                &format!("models.{}", role.as_str()),
                self.primary.get(role),
            );
            issues.extend(primary_issues);
            if let Some(model) = primary {
                route.primary = model;
            }

            let (fallback, fallback_issues) = Self::parse_single_model(
                &format!("models.fallbacks.{}", role.as_str()),
                self.fallbacks.get(role),
            );
            issues.extend(fallback_issues);
            if let Some(model) = fallback {
                route = ModelRoute::new(route.primary).with_fallback(model);
            }

            roster = roster.with_route(role, route);
        }

        (roster, issues)
    }
}
