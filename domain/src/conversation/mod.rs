//! Chat request/response value objects.
//!
//! [`ChatRequest`] mirrors the wire body as loosely as the wire allows, so
//! a malformed field becomes a [`DomainError`] (and a 400) rather than a
//! deserialization failure. [`ChatRequest::into_command`] turns it into a
//! typed [`ChatCommand`].

use crate::brief::entities::Brief;
use crate::core::error::DomainError;
use crate::core::message::UserMessage;
use crate::debate::roles::AgentRole;
use crate::debate::scoring::Scores;
use crate::debate::transcript::Transcript;
use crate::intake::{IntakeContext, IntakeHint};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which half of the conversation a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPhase {
    #[default]
    Intake,
    Debate,
}

impl ChatPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatPhase::Intake => "intake",
            ChatPhase::Debate => "debate",
        }
    }
}

impl fmt::Display for ChatPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intake" => Ok(ChatPhase::Intake),
            "debate" => Ok(ChatPhase::Debate),
            other => Err(DomainError::UnknownPhase(other.to_string())),
        }
    }
}

/// Raw `/api/chat` request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<Value>,
}

/// A validated request
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    Intake {
        message: UserMessage,
        context: IntakeContext,
    },
    Debate {
        message: UserMessage,
        context: IntakeContext,
        brief: Option<Brief>,
    },
}

impl ChatRequest {
    /// Convenience constructor for in-process callers
    pub fn new(message: impl Into<String>, phase: ChatPhase) -> Self {
        Self {
            message: Value::String(message.into()),
            phase: Some(phase.as_str().to_string()),
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_brief(mut self, brief: &Brief) -> Self {
        self.brief = serde_json::to_value(brief).ok();
        self
    }

    /// Validate the body; `phase` defaults to intake.
    pub fn into_command(self) -> Result<ChatCommand, DomainError> {
        let message = match self.message {
            Value::String(text) => UserMessage::try_new(text)?,
            _ => return Err(DomainError::EmptyMessage),
        };

        let phase = match self.phase.as_deref() {
            None => ChatPhase::default(),
            Some(raw) => raw.parse()?,
        };

        let context = match self.context {
            Some(value) => IntakeContext::from_value(value)?,
            None => IntakeContext::new(),
        };

        match phase {
            ChatPhase::Intake => Ok(ChatCommand::Intake { message, context }),
            ChatPhase::Debate => {
                let brief = match self.brief {
                    None | Some(Value::Null) => None,
                    Some(value @ Value::Object(_)) => Some(
                        serde_json::from_value(value)
                            .map_err(|e| DomainError::InvalidBrief(e.to_string()))?,
                    ),
                    Some(_) => {
                        return Err(DomainError::InvalidBrief(
                            "expected a JSON object".to_string(),
                        ));
                    }
                };
                Ok(ChatCommand::Debate {
                    message,
                    context,
                    brief,
                })
            }
        }
    }
}

/// Result of an intake turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeResponse {
    pub reply: String,
    pub brief: Option<Brief>,
    pub next_phase_hint: IntakeHint,
    pub context_echo: IntakeContext,
}

/// Result of a debate turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResponse {
    pub reply: String,
    pub transcript: Transcript,
    pub scores: Scores,
    pub agents_called: Vec<AgentRole>,
}

/// Either response, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Intake(IntakeResponse),
    Debate(DebateResponse),
}

impl ChatResponse {
    pub fn reply(&self) -> &str {
        match self {
            ChatResponse::Intake(r) => &r.reply,
            ChatResponse::Debate(r) => &r.reply,
        }
    }
}

impl From<IntakeResponse> for ChatResponse {
    fn from(response: IntakeResponse) -> Self {
        ChatResponse::Intake(response)
    }
}

impl From<DebateResponse> for ChatResponse {
    fn from(response: DebateResponse) -> Self {
        ChatResponse::Debate(response)
    }
}
