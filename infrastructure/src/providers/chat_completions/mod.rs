//! OpenAI-compatible chat-completions provider
//!
//! Implements the [`LlmGateway`](council_application::LlmGateway) port over a
//! single `POST /chat/completions` call with bearer authentication.

mod adapter;
pub mod types;

pub use adapter::{ChatCompletionsConfig, ChatCompletionsGateway, DEFAULT_ENDPOINT};
pub use types::SamplingParams;
