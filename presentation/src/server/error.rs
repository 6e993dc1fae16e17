//! Mapping of service errors onto HTTP responses

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use council_application::ChatError;
use serde_json::json;
use tracing::{error, warn};

/// Error body returned by the chat endpoint: `{"error": message}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        if err.is_input_error() {
            warn!("Rejected chat request: {}", err);
            Self::bad_request(err.to_string())
        } else {
            error!("Chat request failed: {}", err);
            Self::internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected chat body: {}", rejection.body_text());
        Self::bad_request(format!("invalid JSON body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_application::GatewayError;
    use council_domain::DomainError;

    #[test]
    fn test_input_errors_are_bad_requests() {
        let err = ApiError::from(ChatError::InvalidInput(DomainError::EmptyMessage));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("message is required"));
    }

    #[test]
    fn test_misconfiguration_is_internal() {
        let err = ApiError::from(ChatError::Misconfigured(GatewayError::MissingCredential(
            "GROQ_API_KEY".to_string(),
        )));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("misconfigured"));
    }
}
