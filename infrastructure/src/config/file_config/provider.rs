//! Provider configuration from TOML (`[provider]` section)

use crate::providers::chat_completions::{ChatCompletionsConfig, DEFAULT_ENDPOINT, SamplingParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw provider configuration
///
/// The API key itself never lives in the file; only the name of the
/// environment variable that holds it.
///
/// # Example
///
/// ```toml
/// [provider]
/// endpoint = "https://api.groq.com/openai/v1/chat/completions"
/// api_key_env = "GROQ_API_KEY"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub endpoint: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FileProviderConfig {
    pub fn to_gateway_config(&self) -> ChatCompletionsConfig {
        ChatCompletionsConfig {
            endpoint: self.endpoint.clone(),
            api_key_env: self.api_key_env.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            sampling: SamplingParams::default(),
        }
    }
}
