//! Output format value object

use serde::{Deserialize, Serialize};

/// How a turn result is rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Text,
    /// The wire response as pretty JSON
    Json,
}
