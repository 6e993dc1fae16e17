//! Use cases for the council
//!
//! - [`invoke_model`]: retrying, falling-back model calls
//! - [`run_intake`]: one facilitator turn
//! - [`run_debate`]: one coach/specialist/guard turn
//! - [`review_content`]: the guard and its single rewrite
//! - [`handle_chat`]: request validation and phase dispatch

pub mod handle_chat;
pub mod invoke_model;
pub mod review_content;
pub mod run_debate;
pub mod run_intake;

#[cfg(test)]
pub(crate) mod test_support;
