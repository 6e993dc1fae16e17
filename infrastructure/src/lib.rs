//! Infrastructure layer for decision-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDebateConfig, FileModelsConfig, FileOutputConfig,
    FileOutputFormat, FileProviderConfig, FileRetryConfig, FileServerConfig,
};
pub use providers::chat_completions::{ChatCompletionsConfig, ChatCompletionsGateway};
