//! Decision brief subdomain.
//!
//! A [`Brief`](entities::Brief) is the structured statement the debate runs on.
//! It is assembled over one or more intake turns:
//!
//! 1. [`signals::extract_signals`] classifies the raw user message
//! 2. [`parsing::extract_brief_block`] pulls the facilitator's JSON block out of its reply
//! 3. [`normalize::normalize_brief`] fills defaults and applies the contradiction rule
//!
//! The normalizer is the only place defaults are written.

pub mod entities;
pub mod normalize;
pub mod parsing;
pub mod signals;
