//! Model value object representing an inference endpoint identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Models known to the inference provider (Value Object)
///
/// Unknown identifiers are kept as [`Model::Custom`] so any
/// OpenAI-compatible endpoint can be configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Compound / agentic
    GroqCompound,
    // Llama models
    Llama31_8bInstant,
    Llama33_70bVersatile,
    // Open-weight GPT models
    GptOss120b,
    GptOss20b,
    // Safety
    LlamaGuard4_12b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::GroqCompound => "groq/compound",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            Model::GptOss120b => "openai/gpt-oss-120b",
            Model::GptOss20b => "openai/gpt-oss-20b",
            Model::LlamaGuard4_12b => "meta-llama/llama-guard-4-12b",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a safety classifier model
    pub fn is_guard(&self) -> bool {
        matches!(self, Model::LlamaGuard4_12b)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "groq/compound" => Model::GroqCompound,
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            "llama-3.3-70b-versatile" => Model::Llama33_70bVersatile,
            "openai/gpt-oss-120b" => Model::GptOss120b,
            "openai/gpt-oss-20b" => Model::GptOss20b,
            "meta-llama/llama-guard-4-12b" => Model::LlamaGuard4_12b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
