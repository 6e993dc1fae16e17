//! Progress milestones within one debate turn

use serde::{Deserialize, Serialize};

/// Phase of a debate turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebatePhase {
    /// Coach frames the brief
    Framing,
    /// Selected specialists answer the framing
    FirstRound,
    /// Specialists exchange critical deltas after a conflict
    Rebuttal,
    /// Coach fuses scores and latest outputs
    Fusion,
    /// Guard review and optional patch
    Guard,
}

impl DebatePhase {
    pub fn as_str(&self) -> &str {
        match self {
            DebatePhase::Framing => "framing",
            DebatePhase::FirstRound => "round_1",
            DebatePhase::Rebuttal => "round_2",
            DebatePhase::Fusion => "fusion",
            DebatePhase::Guard => "guard",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            DebatePhase::Framing => "Framing",
            DebatePhase::FirstRound => "Round 1",
            DebatePhase::Rebuttal => "Round 2",
            DebatePhase::Fusion => "Fusion",
            DebatePhase::Guard => "Guard Review",
        }
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
