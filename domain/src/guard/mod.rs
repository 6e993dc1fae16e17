//! Guard verdict parsing.
//!
//! The guard persona answers with [`GUARD_APPROVAL_TOKEN`] when the text
//! is acceptable, or with an itemized list of corrections otherwise.

/// Token the guard persona emits to approve a text
pub const GUARD_APPROVAL_TOKEN: &str = "OK-GUARD";

/// Outcome of one guard pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    Approved,
    /// Itemized corrections, verbatim from the guard
    Corrections(String),
}

impl GuardVerdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, GuardVerdict::Approved)
    }
}

/// Parse a guard response.
///
/// Approval is the presence of the token anywhere in the response,
/// case-insensitive; anything else is a list of corrections.
pub fn parse_guard_verdict(response: &str) -> GuardVerdict {
    if response
        .to_uppercase()
        .contains(&GUARD_APPROVAL_TOKEN.to_uppercase())
    {
        GuardVerdict::Approved
    } else {
        GuardVerdict::Corrections(response.trim().to_string())
    }
}
