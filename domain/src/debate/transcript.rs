//! Debate transcript

use super::roles::AgentRole;
use crate::core::string::cap;
use serde::{Deserialize, Serialize};

/// Maximum characters kept per transcript entry
pub const TRANSCRIPT_ENTRY_CAP: usize = 2000;

/// Coach framing and first specialist pass
pub const FIRST_ROUND: u8 = 1;
/// Specialist rebuttal, only when a conflict was detected
pub const REBUTTAL_ROUND: u8 = 2;
/// Coach fusion of the latest specialist outputs
pub const FUSION_ROUND: u8 = 3;

/// One recorded agent output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub agent: AgentRole,
    pub round: u8,
    /// Output capped at [`TRANSCRIPT_ENTRY_CAP`] characters
    pub content: String,
}

/// Append-only record of a single debate turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, agent: AgentRole, round: u8, content: &str) {
        self.entries.push(TranscriptEntry {
            agent,
            round,
            content: cap(content, TRANSCRIPT_ENTRY_CAP),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries recorded for a given round
    pub fn round(&self, round: u8) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().filter(move |e| e.round == round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_caps_content() {
        let mut transcript = Transcript::new();
        transcript.record(AgentRole::Coach, FIRST_ROUND, &"x".repeat(2500));
        let entry = &transcript.entries()[0];
        assert_eq!(entry.content.chars().count(), TRANSCRIPT_ENTRY_CAP + 1);
        assert!(entry.content.ends_with('…'));
    }

    #[test]
    fn test_round_filter_and_order() {
        let mut transcript = Transcript::new();
        transcript.record(AgentRole::Coach, FIRST_ROUND, "plan");
        transcript.record(AgentRole::Tech, FIRST_ROUND, "arq");
        transcript.record(AgentRole::Tech, REBUTTAL_ROUND, "delta");
        transcript.record(AgentRole::Coach, FUSION_ROUND, "final");

        let first: Vec<_> = transcript.round(FIRST_ROUND).map(|e| e.agent).collect();
        assert_eq!(first, vec![AgentRole::Coach, AgentRole::Tech]);
        assert_eq!(transcript.len(), 4);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut transcript = Transcript::new();
        transcript.record(AgentRole::Biz, FIRST_ROUND, "ICP");
        let value = serde_json::to_value(&transcript).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "agent": "biz", "round": 1, "content": "ICP" }])
        );
    }
}
