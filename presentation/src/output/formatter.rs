//! Output formatter trait

use council_domain::ChatResponse;

/// Trait for formatting turn results
pub trait OutputFormatter {
    /// Format the complete turn
    fn format(&self, response: &ChatResponse) -> String;

    /// Format as JSON
    fn format_json(&self, response: &ChatResponse) -> String;

    /// Format the reply text only (concise output)
    fn format_reply_only(&self, response: &ChatResponse) -> String;
}
