//! Intake (facilitation) phase concepts.
//!
//! The intake phase is a small state machine driven by the caller:
//!
//! ```text
//! collecting ──► ready
//!     │
//!     └──► needs_fix ──(caller clarifies)──► collecting
//! ```
//!
//! The only state the system keeps between turns is the turn counter
//! inside the caller-echoed [`IntakeContext`].

pub mod context;

pub use context::IntakeContext;

use serde::{Deserialize, Serialize};

/// What the caller should do next after an intake turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeHint {
    /// Keep collecting information
    Intake,
    /// A contradiction was found; show the clarification to the user
    NeedsFix,
    /// The brief is usable for the debate phase
    Ready,
}

impl IntakeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeHint::Intake => "intake",
            IntakeHint::NeedsFix => "needs_fix",
            IntakeHint::Ready => "ready",
        }
    }
}

impl std::fmt::Display for IntakeHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bounded-question policy for the facilitator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    /// Turn count at which a best-effort brief is synthesized
    /// instead of asking more questions
    pub question_limit: u64,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self { question_limit: 2 }
    }
}

impl IntakePolicy {
    /// Whether the facilitator has used up its open questions
    pub fn should_commit(&self, turns: u64) -> bool {
        turns >= self.question_limit
    }
}
