//! Debate phase concepts.
//!
//! - [`roles::AgentRole`]: personas taking part in a conversation, and specialist selection
//! - [`roster::ModelRoster`]: which model (and fallback) serves each role
//! - [`transcript::Transcript`]: ordered record of one debate turn
//! - [`conflict::detect_conflict`]: decides whether a rebuttal round runs
//! - [`scoring::score_from_agents`]: heuristic scores over specialist outputs
//! - [`phase::DebatePhase`]: progress milestones within a debate turn

pub mod conflict;
pub mod phase;
pub mod roles;
pub mod roster;
pub mod scoring;
pub mod transcript;
