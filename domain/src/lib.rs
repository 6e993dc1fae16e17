//! Domain layer for decision-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council turn is one of two phases, chosen by the caller:
//!
//! - **Intake**: a facilitator turns free-form messages into a [`Brief`]
//! - **Debate**: a coach frames the brief, specialists argue it over one or
//!   two rounds, the coach fuses their positions and a guard reviews the result
//!
//! ## Lite / Full (Mode)
//!
//! - **Lite**: the coach debates with the technical specialist only
//! - **Full** (default): technical, business and data specialists take part
//!
//! Every classifier in this crate (signals, brief block parsing, conflict
//! detection, scoring, guard verdicts) is a pure function over text.

pub mod brief;
pub mod config;
pub mod conversation;
pub mod core;
pub mod debate;
pub mod guard;
pub mod intake;
pub mod prompt;
pub mod retry;

// Re-export commonly used types
pub use brief::{
    entities::{Brief, Mode},
    normalize::{Normalized, normalize_brief},
    parsing::{FacilitatorReply, default_brief, extract_brief_block},
    signals::{Signals, extract_signals},
};
pub use config::{ConfigIssue, ConfigIssueCode, DispatchMode, OutputFormat, Severity};
pub use conversation::{
    ChatCommand, ChatPhase, ChatRequest, ChatResponse, DebateResponse, IntakeResponse,
};
pub use core::{error::DomainError, message::UserMessage, model::Model, string::cap};
pub use debate::{
    conflict::{ConflictKind, detect_conflict},
    phase::DebatePhase,
    roles::{AgentRole, select_specialists},
    roster::{ModelRoster, ModelRoute},
    scoring::{Scores, score_from_agents},
    transcript::{Transcript, TranscriptEntry},
};
pub use guard::{GuardVerdict, parse_guard_verdict};
pub use intake::{IntakeContext, IntakeHint, IntakePolicy};
pub use prompt::{PromptTemplate, persona_for};
pub use retry::{FailureKind, RetryPolicy, parse_retry_after};
