//! LLM Gateway port
//!
//! Defines the interface for communicating with the inference provider.

use async_trait::async_trait;
use council_domain::{FailureKind, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Rate limited: {body}")]
    RateLimited { body: String },

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited { .. })
    }

    /// Raw provider body, when the provider answered at all
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            GatewayError::RateLimited { body } | GatewayError::RequestFailed { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> FailureKind {
        if self.is_rate_limited() {
            FailureKind::RateLimited
        } else {
            FailureKind::Transient
        }
    }
}

/// A single chat-completion call: one system instruction, one user prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(
        model: Model,
        system: impl Into<String>,
        prompt: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            system: system.into(),
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one completion request and return the generated text.
    ///
    /// A response without content yields an empty string, not an error.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;

    /// Check that the gateway can be used at all (credentials present).
    ///
    /// Called before the first model call of every turn.
    fn ensure_ready(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_classification() {
        let error = GatewayError::RateLimited {
            body: "Please try again in 1.5s".to_string(),
        };
        assert!(error.is_rate_limited());
        assert_eq!(error.failure_kind(), FailureKind::RateLimited);
        assert_eq!(error.raw_body(), Some("Please try again in 1.5s"));
    }

    #[test]
    fn test_other_errors_are_transient() {
        let error = GatewayError::RequestFailed {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transient);
        assert_eq!(error.raw_body(), Some("unavailable"));
        assert_eq!(GatewayError::Timeout.raw_body(), None);
    }
}
