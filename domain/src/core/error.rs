//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("message is required (non-empty string)")]
    EmptyMessage,

    #[error("unknown phase: {0}")]
    UnknownPhase(String),

    #[error("invalid brief: {0}")]
    InvalidBrief(String),

    #[error("invalid context: expected a JSON object")]
    InvalidContext,
}
