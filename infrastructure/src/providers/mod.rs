//! Model provider adapters
//!
//! - [`chat_completions`]: OpenAI-compatible chat-completions endpoint
//!   (Groq by default)

pub mod chat_completions;
