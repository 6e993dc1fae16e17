//! Council configuration container.
//!
//! Built once at start-up (from file configuration or defaults) and shared
//! read-only by every request.

use council_domain::{DispatchMode, IntakePolicy, ModelRoster, RetryPolicy};

/// Configuration for the intake and debate use cases.
#[derive(Debug, Clone, Default)]
pub struct CouncilConfig {
    roster: ModelRoster,
    retry: RetryPolicy,
    intake: IntakePolicy,
    dispatch: DispatchMode,
}

impl CouncilConfig {
    pub fn new(
        roster: ModelRoster,
        retry: RetryPolicy,
        intake: IntakePolicy,
        dispatch: DispatchMode,
    ) -> Self {
        Self {
            roster,
            retry,
            intake,
            dispatch,
        }
    }

    // ==================== Accessors ====================

    /// Which model serves each role.
    pub fn roster(&self) -> &ModelRoster {
        &self.roster
    }

    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn intake(&self) -> &IntakePolicy {
        &self.intake
    }

    pub fn dispatch(&self) -> DispatchMode {
        self.dispatch
    }

    // ==================== Builders ====================

    pub fn with_roster(mut self, roster: ModelRoster) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_intake(mut self, intake: IntakePolicy) -> Self {
        self.intake = intake;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }
}
