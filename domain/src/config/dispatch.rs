//! Specialist dispatch mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the specialists of one round are called.
///
/// `Sequential` keeps the provider's tokens-per-minute usage smooth;
/// `Concurrent` trades that for latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    #[default]
    Sequential,
    Concurrent,
}

impl DispatchMode {
    pub const VALID_VALUES: &'static [&'static str] = &["sequential", "concurrent"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMode::Sequential => "sequential",
            DispatchMode::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" => Ok(DispatchMode::Sequential),
            "concurrent" | "parallel" => Ok(DispatchMode::Concurrent),
            other => Err(format!("unknown dispatch mode: {}", other)),
        }
    }
}
