//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate turn.

use council_domain::{AgentRole, DebatePhase, Model};
use std::time::Duration;

/// Callback for progress updates during a debate turn
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, logs, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &DebatePhase, total_tasks: usize);

    /// Called when an agent finishes within a phase
    fn on_agent_complete(&self, phase: &DebatePhase, role: AgentRole, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &DebatePhase);

    /// Called after a failed model attempt, before backing off.
    fn on_retry(&self, _model: &Model, _attempt: u32, _delay: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &DebatePhase, _total_tasks: usize) {}
    fn on_agent_complete(&self, _phase: &DebatePhase, _role: AgentRole, _success: bool) {}
    fn on_phase_complete(&self, _phase: &DebatePhase) {}
}
