//! Chat-completions gateway adapter

use super::types::{ChatCompletionBody, ChatCompletionResponse, SamplingParams, classify_status};
use async_trait::async_trait;
use council_application::{CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Groq's OpenAI-compatible endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Settings for [`ChatCompletionsGateway`]
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout: Duration,
    pub sampling: SamplingParams,
}

impl Default for ChatCompletionsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            timeout: Duration::from_secs(60),
            sampling: SamplingParams::default(),
        }
    }
}

/// [`LlmGateway`] over an OpenAI-compatible chat-completions API
pub struct ChatCompletionsGateway {
    client: reqwest::Client,
    config: ChatCompletionsConfig,
    api_key: Option<String>,
}

impl ChatCompletionsGateway {
    /// Create the gateway, reading the API key from the configured
    /// environment variable.
    ///
    /// A missing key is not an error here; it is reported by
    /// [`LlmGateway::ensure_ready`] on every turn.
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("{} is not set; model calls will fail", config.api_key_env);
        }
        Self::with_api_key(config, api_key)
    }

    /// Create the gateway with an explicit key
    pub fn with_api_key(
        config: ChatCompletionsConfig,
        api_key: Option<String>,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("Chat-completions gateway -> {}", config.endpoint);
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn api_key(&self) -> Result<&str, GatewayError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GatewayError::MissingCredential(self.config.api_key_env.clone()))
    }
}

#[async_trait]
impl LlmGateway for ChatCompletionsGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self.api_key()?;
        let body = ChatCompletionBody::new(&request, self.config.sampling);

        debug!("POST {} model={}", self.config.endpoint, request.model);
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(parsed.into_text())
    }

    fn ensure_ready(&self) -> Result<(), GatewayError> {
        self.api_key().map(|_| ())
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Model;

    #[test]
    fn test_missing_key_is_reported_by_ensure_ready() {
        let gateway = ChatCompletionsGateway::with_api_key(ChatCompletionsConfig::default(), None)
            .unwrap();

        assert_eq!(
            gateway.ensure_ready(),
            Err(GatewayError::MissingCredential("GROQ_API_KEY".to_string()))
        );
    }

    #[test]
    fn test_present_key_is_ready() {
        let gateway = ChatCompletionsGateway::with_api_key(
            ChatCompletionsConfig::default(),
            Some("gsk_test".to_string()),
        )
        .unwrap();

        assert!(gateway.ensure_ready().is_ok());
    }

    #[tokio::test]
    async fn test_complete_without_key_fails_before_sending() {
        let config = ChatCompletionsConfig {
            api_key_env: "COUNCIL_TEST_KEY".to_string(),
            ..Default::default()
        };
        let gateway = ChatCompletionsGateway::with_api_key(config, None).unwrap();

        let result = gateway
            .complete(CompletionRequest::new(Model::GptOss20b, "s", "p", 10))
            .await;

        assert_eq!(
            result,
            Err(GatewayError::MissingCredential("COUNCIL_TEST_KEY".to_string()))
        );
    }
}
