//! Personas and prompt templates.
//!
//! - [`personas`]: fixed system instructions, one per [`AgentRole`](crate::AgentRole)
//! - [`template::PromptTemplate`]: user-facing prompts for each step of a turn

pub mod personas;
pub mod template;

pub use personas::persona_for;
pub use template::PromptTemplate;
