//! Presentation layer for decision-council
//!
//! This crate contains the CLI definition, the HTTP binding, output
//! formatters and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::{ConsoleFormatter, OutputFormatter};
pub use progress::{ProgressReporter, SimpleProgress};
pub use server::{ApiError, router, serve};
