//! Configuration file loading for decision-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_*` environment variables (`COUNCIL_SERVER__BIND=0.0.0.0:80`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./council.toml` or `./.council.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/decision-council/config.toml`
//! 5. Fallback: `~/.config/decision-council/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDebateConfig, FileModelsConfig, FileOutputConfig, FileOutputFormat,
    FileProviderConfig, FileRetryConfig, FileRoleModels, FileServerConfig,
};
pub use loader::ConfigLoader;
