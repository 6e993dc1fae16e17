//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: model identifiers served by the inference provider
//! - [`message::UserMessage`]: a validated, non-empty user message
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod message;
pub mod model;
pub mod string;
