//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Raw HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// `host:port` to listen on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
