//! Brief entity and execution mode

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// How many specialists take part in a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One specialist, single round
    Lite,
    /// Three specialists, optional rebuttal round
    Full,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lite => "lite",
            Mode::Full => "full",
        }
    }

    /// Lenient parse used for model-produced JSON.
    ///
    /// Free-plan wording maps to `Lite`; anything unrecognized is `None`.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lite" | "free" | "gratis" => Some(Mode::Lite),
            "full" => Some(Mode::Full),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured decision brief (Entity)
///
/// Field names on the wire are the Spanish ones used by the facilitator
/// persona. All scalar fields are optional until the brief has been
/// normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    /// Single-sentence goal
    #[serde(rename = "objetivo", default, deserialize_with = "lenient_text")]
    pub objective: Option<String>,
    /// Ordered constraints
    #[serde(rename = "restricciones", default, deserialize_with = "lenient_list")]
    pub constraints: Vec<String>,
    /// Single-sentence success criterion
    #[serde(rename = "criterio_exito", default, deserialize_with = "lenient_text")]
    pub success_criterion: Option<String>,
    /// Single-word priority
    #[serde(rename = "prioridad", default, deserialize_with = "lenient_text")]
    pub priority: Option<String>,
    /// Deadline (date or number of weeks)
    #[serde(rename = "plazo", default, deserialize_with = "lenient_text")]
    pub deadline: Option<String>,
    #[serde(rename = "modo", default, deserialize_with = "lenient_mode")]
    pub mode: Option<Mode>,
    /// Assumptions declared when data was missing
    #[serde(
        rename = "supuestos",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub assumptions: Vec<String>,
}

impl Brief {
    /// Create a brief with only an objective set
    pub fn with_objective(objective: impl Into<String>) -> Self {
        Self {
            objective: Some(objective.into()),
            ..Default::default()
        }
    }

    /// A brief is usable for debate once it has a non-empty objective
    pub fn is_complete(&self) -> bool {
        has_text(&self.objective)
    }

    /// Whether any constraint contains `needle` (case-insensitive)
    pub fn has_constraint_mentioning(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.constraints
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
    }

    /// Objective text, or empty when unset
    pub fn objective_text(&self) -> &str {
        self.objective.as_deref().unwrap_or_default()
    }

    /// Mode, falling back to `Full` for briefs that skipped normalization
    pub fn mode_or_full(&self) -> Mode {
        self.mode.unwrap_or(Mode::Full)
    }
}

/// `true` when the option holds non-blank text
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_text))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(scalar_to_text).collect(),
        Some(other) => scalar_to_text(other).into_iter().collect(),
        None => Vec::new(),
    })
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<Mode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(scalar_to_text)
        .and_then(|s| Mode::parse_lenient(&s)))
}
