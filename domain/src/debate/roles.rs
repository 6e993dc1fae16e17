//! Agent roles and specialist selection

use crate::brief::entities::Mode;
use serde::{Deserialize, Serialize};

/// A persona taking part in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    /// Turns free-text intent into a brief (intake phase)
    Facilitator,
    /// Frames the problem and fuses specialist outputs
    Coach,
    /// Software architecture specialist
    Tech,
    /// Business and sales specialist
    Biz,
    /// Data and experimentation specialist
    Data,
    /// Policy-compliance reviewer
    Guard,
}

impl AgentRole {
    /// Specialists in transcript order
    pub const SPECIALISTS: [AgentRole; 3] = [AgentRole::Tech, AgentRole::Biz, AgentRole::Data];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Facilitator => "facilitator",
            AgentRole::Coach => "coach",
            AgentRole::Tech => "tech",
            AgentRole::Biz => "biz",
            AgentRole::Data => "data",
            AgentRole::Guard => "guard",
        }
    }

    /// Label used when specialist outputs are quoted to other agents
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::Facilitator => "FAC",
            AgentRole::Coach => "COACH",
            AgentRole::Tech => "ARQ",
            AgentRole::Biz => "BIZ",
            AgentRole::Data => "DATA",
            AgentRole::Guard => "GUARD",
        }
    }

    pub fn is_specialist(&self) -> bool {
        Self::SPECIALISTS.contains(self)
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deterministic, brief-driven specialist selection.
///
/// Lite mode (or the caller's lite override) runs only the technical
/// specialist; full mode runs all three.
pub fn select_specialists(mode: Mode, lite_override: bool) -> Vec<AgentRole> {
    if mode == Mode::Lite || lite_override {
        vec![AgentRole::Tech]
    } else {
        AgentRole::SPECIALISTS.to_vec()
    }
}
