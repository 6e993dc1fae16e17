//! Wire types for the chat-completions API and error classification

use council_application::{CompletionRequest, GatewayError};
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            frequency_penalty: 0.2,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Request body: one system message, one user message
#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    #[serde(flatten)]
    pub sampling: SamplingParams,
}

impl<'a> ChatCompletionBody<'a> {
    pub fn new(request: &'a CompletionRequest, sampling: SamplingParams) -> Self {
        Self {
            model: request.model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            sampling,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice; empty when absent
    pub fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}

/// Map a non-2xx status and body to a gateway error
pub fn classify_status(status: u16, body: String) -> GatewayError {
    match status {
        429 => GatewayError::RateLimited { body },
        _ => GatewayError::RequestFailed { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::Model;
    use serde_json::json;

    #[test]
    fn test_body_shape() {
        let request = CompletionRequest::new(Model::GroqCompound, "sys", "hola", 650);
        let body = ChatCompletionBody::new(&request, SamplingParams::default());

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "groq/compound");
        assert_eq!(value["max_tokens"], 650);
        assert_eq!(value["messages"][0], json!({"role": "system", "content": "sys"}));
        assert_eq!(value["messages"][1], json!({"role": "user", "content": "hola"}));
        assert_eq!(value["presence_penalty"], 0.0);
        assert!((value["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_into_text_reads_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "hola"}}]
        }))
        .unwrap();
        assert_eq!(response.into_text(), "hola");
    }

    #[test]
    fn test_into_text_missing_content_is_empty() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_text(), "");

        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": null}}]})).unwrap();
        assert_eq!(response.into_text(), "");
    }

    #[test]
    fn test_classify_status() {
        assert!(classify_status(429, "try again in 2s".to_string()).is_rate_limited());
        assert_eq!(
            classify_status(500, "boom".to_string()),
            GatewayError::RequestFailed {
                status: 500,
                body: "boom".to_string()
            }
        );
    }
}
