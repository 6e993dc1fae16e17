//! User message value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A message sent by the user in a single turn (Value Object)
///
/// Always non-empty once constructed; the raw text is kept verbatim
/// (no trimming) because signal extraction runs over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserMessage {
    content: String,
}

impl UserMessage {
    /// Try to create a new message, rejecting empty or blank text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyMessage)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the message content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for UserMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for UserMessage {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserMessage::try_new(s)
    }
}

impl From<UserMessage> for String {
    fn from(message: UserMessage) -> Self {
        message.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let m = UserMessage::try_new("quiero vender GPS").unwrap();
        assert_eq!(m.content(), "quiero vender GPS");
    }

    #[test]
    fn test_try_new_empty() {
        assert_eq!(UserMessage::try_new(""), Err(DomainError::EmptyMessage));
        assert_eq!(UserMessage::try_new("   "), Err(DomainError::EmptyMessage));
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let parsed: Result<UserMessage, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
        let parsed: UserMessage = serde_json::from_str("\"hola\"").unwrap();
        assert_eq!(parsed.content(), "hola");
    }
}
