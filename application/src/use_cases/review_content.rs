//! Content guard
//!
//! Silent safety/compliance review of the fused reply, with at most one
//! corrective rewrite.

use crate::config::CouncilConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::invoke_model::{InvokeError, ModelInvoker};
use council_domain::prompt::personas::{COACH, GUARD};
use council_domain::{GuardVerdict, ModelRoute, PromptTemplate, parse_guard_verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Output budget of the first guard pass
pub const GUARD_MAX_TOKENS: u32 = 200;
/// Output budget of the coach's corrective rewrite
pub const PATCH_MAX_TOKENS: u32 = 480;
/// Output budget of the second guard pass
pub const RECHECK_MAX_TOKENS: u32 = 180;

/// External-call failures during review. Disapproval is never an error.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Guard failed: {0}")]
    Guard(#[source] InvokeError),

    #[error("Patch failed: {0}")]
    Patch(#[source] InvokeError),
}

/// Result of a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOutcome {
    /// Text to show the user
    pub text: String,
    /// Whether the guard approved `text`
    pub approved: bool,
    /// Corrections requested by the first guard pass
    pub corrections: Option<String>,
    /// Whether `text` is the coach's rewrite
    pub patched: bool,
}

/// Reviews candidate replies (at most 2 guard calls and 1 patch call)
pub struct ContentGuard<G: LlmGateway + 'static> {
    invoker: ModelInvoker<G>,
    guard: ModelRoute,
    coach: ModelRoute,
}

impl<G: LlmGateway + 'static> ContentGuard<G> {
    pub fn new(gateway: Arc<G>, config: &CouncilConfig) -> Self {
        Self {
            invoker: ModelInvoker::new(gateway, *config.retry()),
            guard: config.roster().guard.clone(),
            coach: config.roster().coach.clone(),
        }
    }

    pub async fn review(&self, candidate: &str) -> Result<GuardOutcome, ReviewError> {
        self.review_with_progress(candidate, &NoProgress).await
    }

    pub async fn review_with_progress(
        &self,
        candidate: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<GuardOutcome, ReviewError> {
        let first = self
            .invoker
            .invoke_with_progress(&self.guard, GUARD, candidate, GUARD_MAX_TOKENS, progress)
            .await
            .map_err(ReviewError::Guard)?;

        let corrections = match parse_guard_verdict(&first) {
            GuardVerdict::Approved => {
                debug!("Guard approved on first pass");
                return Ok(GuardOutcome {
                    text: candidate.to_string(),
                    approved: true,
                    corrections: None,
                    patched: false,
                });
            }
            GuardVerdict::Corrections(corrections) => corrections,
        };

        info!("Guard requested corrections, patching");
        let patched = self
            .invoker
            .invoke_with_progress(
                &self.coach,
                COACH,
                &PromptTemplate::patch(&corrections, candidate),
                PATCH_MAX_TOKENS,
                progress,
            )
            .await
            .map_err(ReviewError::Patch)?;

        let second = self
            .invoker
            .invoke_with_progress(&self.guard, GUARD, &patched, RECHECK_MAX_TOKENS, progress)
            .await
            .map_err(ReviewError::Guard)?;

        if parse_guard_verdict(&second).is_approved() {
            Ok(GuardOutcome {
                text: patched,
                approved: true,
                corrections: Some(corrections),
                patched: true,
            })
        } else {
            info!("Patched text was not approved, keeping the original");
            Ok(GuardOutcome {
                text: candidate.to_string(),
                approved: false,
                corrections: Some(corrections),
                patched: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{ScriptedGateway, transient};

    fn guard(gateway: ScriptedGateway) -> (Arc<ScriptedGateway>, ContentGuard<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let guard = ContentGuard::new(Arc::clone(&gateway), &CouncilConfig::default());
        (gateway, guard)
    }

    #[tokio::test]
    async fn test_approved_on_first_pass() {
        let (gateway, guard) = guard(ScriptedGateway::new().reply(GUARD, "ok-guard"));

        let outcome = guard.review("plan").await.unwrap();

        assert_eq!(outcome.text, "plan");
        assert!(outcome.approved);
        assert!(!outcome.patched);
        assert_eq!(gateway.calls().len(), 1);
        assert_eq!(gateway.calls()[0].max_tokens, GUARD_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_patch_approved_on_second_pass() {
        let gateway = ScriptedGateway::new()
            .with_script(
                GUARD,
                vec![Ok("- quitar email".to_string()), Ok("OK-GUARD".to_string())],
            )
            .reply(COACH, "plan corregido");
        let (gateway, guard) = guard(gateway);

        let outcome = guard.review("plan con email").await.unwrap();

        assert_eq!(outcome.text, "plan corregido");
        assert!(outcome.approved);
        assert!(outcome.patched);
        assert_eq!(outcome.corrections.as_deref(), Some("- quitar email"));

        let guard_calls = gateway.calls_for(GUARD);
        assert_eq!(guard_calls.len(), 2);
        assert_eq!(guard_calls[1].max_tokens, RECHECK_MAX_TOKENS);
        assert_eq!(guard_calls[1].prompt, "plan corregido");

        let patch_calls = gateway.calls_for(COACH);
        assert_eq!(patch_calls.len(), 1);
        assert_eq!(patch_calls[0].max_tokens, PATCH_MAX_TOKENS);
        assert!(patch_calls[0].prompt.contains("- quitar email"));
        assert!(patch_calls[0].prompt.contains("plan con email"));
    }

    #[tokio::test]
    async fn test_rejected_patch_keeps_original() {
        let gateway = ScriptedGateway::new()
            .with_script(
                GUARD,
                vec![Ok("- quitar email".to_string()), Ok("- sigue mal".to_string())],
            )
            .reply(COACH, "plan corregido");
        let (gateway, guard) = guard(gateway);

        let outcome = guard.review("plan con email").await.unwrap();

        assert_eq!(outcome.text, "plan con email");
        assert!(!outcome.approved);
        assert!(!outcome.patched);
        assert_eq!(gateway.calls_for(GUARD).len(), 2);
        assert_eq!(gateway.calls_for(COACH).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_failure_is_an_error() {
        let (_gateway, guard) = guard(
            ScriptedGateway::new().with_script(GUARD, (0..3).map(|_| transient()).collect()),
        );

        let result = guard.review("plan").await;

        assert!(matches!(result, Err(ReviewError::Guard(_))));
    }
}
