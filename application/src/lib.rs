//! Application layer for decision-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CouncilConfig;
pub use ports::{
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::handle_chat::{ChatError, ChatService};
pub use use_cases::invoke_model::{InvokeError, ModelInvoker};
pub use use_cases::review_content::{ContentGuard, GuardOutcome, ReviewError};
pub use use_cases::run_debate::{RunDebateError, RunDebateInput, RunDebateUseCase};
pub use use_cases::run_intake::{RunIntakeError, RunIntakeInput, RunIntakeUseCase};
