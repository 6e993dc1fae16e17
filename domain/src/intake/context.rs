//! Caller-echoed context bag

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the system-owned turn counter
pub const TURN_COUNTER_KEY: &str = "__intake_turns";

/// Opaque key/value bag round-tripped by the caller (Value Object)
///
/// Every key except [`TURN_COUNTER_KEY`] belongs to the caller and is
/// passed through untouched. Two caller keys are read: `lite` (truthy)
/// and `plan` (`"free"`), both meaning "prefer the lite mode".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeContext {
    entries: Map<String, Value>,
}

impl IntakeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary JSON value; `null` is treated as empty
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            Value::Null => Ok(Self::default()),
            _ => Err(DomainError::InvalidContext),
        }
    }

    /// Set a caller-defined key
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Current turn counter (0 when absent or malformed)
    ///
    /// Accepts integers, floats and numeric strings, as JSON callers
    /// are not always careful with types.
    pub fn turns(&self) -> u64 {
        match self.entries.get(TURN_COUNTER_KEY) {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Copy of this context with the turn counter incremented by one,
    /// saturating at `u64::MAX`
    pub fn next_turn(&self) -> Self {
        let mut next = self.clone();
        next.entries
            .insert(TURN_COUNTER_KEY.to_string(), Value::from(self.turns().saturating_add(1)));
        next
    }

    /// Whether the caller explicitly asked for the lite mode
    pub fn prefers_lite(&self) -> bool {
        self.lite_override() || self.entries.get("plan").and_then(Value::as_str) == Some("free")
    }

    /// Truthy `lite` key (JavaScript-style truthiness)
    pub fn lite_override(&self) -> bool {
        match self.entries.get("lite") {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        }
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_counter_round_trip() {
        let first = IntakeContext::new().with("user", json!("ana")).next_turn();
        assert_eq!(first.turns(), 1);

        // Caller echoes the context back as JSON
        let echoed = IntakeContext::from_value(first.as_value()).unwrap();
        let second = echoed.next_turn();
        assert_eq!(second.turns(), 2);
        assert_eq!(second.get("user"), Some(&json!("ana")));
    }

    #[test]
    fn test_turns_accepts_loose_types() {
        let ctx = IntakeContext::from_value(json!({ "__intake_turns": "3" })).unwrap();
        assert_eq!(ctx.turns(), 3);
        let ctx = IntakeContext::from_value(json!({ "__intake_turns": 1.0 })).unwrap();
        assert_eq!(ctx.turns(), 1);
        let ctx = IntakeContext::from_value(json!({ "__intake_turns": "x" })).unwrap();
        assert_eq!(ctx.turns(), 0);
    }

    #[test]
    fn test_next_turn_saturates_on_huge_counters() {
        for huge in [json!(u64::MAX), json!(1e30), json!("18446744073709551615")] {
            let ctx = IntakeContext::from_value(json!({ "__intake_turns": huge })).unwrap();
            assert_eq!(ctx.turns(), u64::MAX);
            assert_eq!(ctx.next_turn().turns(), u64::MAX);
        }
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert_eq!(
            IntakeContext::from_value(json!([1, 2])),
            Err(DomainError::InvalidContext)
        );
        assert!(IntakeContext::from_value(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_prefers_lite() {
        assert!(IntakeContext::new().with("lite", json!(true)).prefers_lite());
        assert!(IntakeContext::new().with("plan", json!("free")).prefers_lite());
        assert!(!IntakeContext::new().with("plan", json!("pro")).prefers_lite());
        assert!(!IntakeContext::new().with("lite", json!(false)).prefers_lite());
        assert!(!IntakeContext::new().prefers_lite());
    }
}
