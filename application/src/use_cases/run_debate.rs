//! Run Debate use case
//!
//! Orchestrates one debate turn:
//!
//! 1. **Framing**: the coach frames the normalized brief
//! 2. **Round 1**: selected specialists answer the framing
//! 3. **Round 2**: only in full mode, when tech and biz conflict
//! 4. **Fusion**: the coach fuses scores and latest positions
//! 5. **Guard**: silent review, at most one rewrite

use crate::config::CouncilConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::invoke_model::{InvokeError, ModelInvoker};
use crate::use_cases::review_content::{ContentGuard, ReviewError};
use council_domain::debate::transcript::{FIRST_ROUND, FUSION_ROUND, REBUTTAL_ROUND};
use council_domain::{
    AgentRole, Brief, DebatePhase, DebateResponse, DispatchMode, IntakeContext, Mode, ModelRoster,
    PromptTemplate, Transcript, UserMessage, detect_conflict, extract_signals, normalize_brief,
    persona_for, score_from_agents, select_specialists,
};
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Output budget of the coach (framing and fusion)
pub const COACH_MAX_TOKENS: u32 = 650;
/// Output budget of a first-round specialist answer
pub const FIRST_ROUND_MAX_TOKENS: u32 = 550;
/// Output budget of a rebuttal
pub const REBUTTAL_MAX_TOKENS: u32 = 420;

/// Errors that can occur during a debate turn
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("{role} failed: {source}")]
    Agent {
        role: AgentRole,
        #[source]
        source: InvokeError,
    },

    #[error(transparent)]
    Review(#[from] ReviewError),
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    pub message: UserMessage,
    pub context: IntakeContext,
    /// Brief confirmed during intake; built from the message when absent
    pub brief: Option<Brief>,
}

impl RunDebateInput {
    pub fn new(message: UserMessage, context: IntakeContext) -> Self {
        Self {
            message,
            context,
            brief: None,
        }
    }

    pub fn with_brief(mut self, brief: Brief) -> Self {
        self.brief = Some(brief);
        self
    }
}

/// Use case for running one debate turn
pub struct RunDebateUseCase<G: LlmGateway + 'static> {
    invoker: ModelInvoker<G>,
    guard: ContentGuard<G>,
    roster: ModelRoster,
    dispatch: DispatchMode,
}

impl<G: LlmGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>, config: &CouncilConfig) -> Self {
        Self {
            invoker: ModelInvoker::new(Arc::clone(&gateway), *config.retry()),
            guard: ContentGuard::new(gateway, config),
            roster: config.roster().clone(),
            dispatch: config.dispatch(),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateResponse, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDebateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<DebateResponse, RunDebateError> {
        let message = input.message.content();
        let signals = extract_signals(message);
        let partial = input
            .brief
            .unwrap_or_else(|| Brief::with_objective(message));
        let brief = normalize_brief(Some(partial), &signals, &input.context).brief;

        let mut transcript = Transcript::new();
        let mut agents_called = vec![AgentRole::Coach];

        // Framing
        info!("Debate: framing \"{}\"", brief.objective_text());
        progress.on_phase_start(&DebatePhase::Framing, 1);
        let framing = self
            .call(
                AgentRole::Coach,
                &PromptTemplate::coach_brief(&brief),
                COACH_MAX_TOKENS,
                progress,
            )
            .await;
        progress.on_agent_complete(&DebatePhase::Framing, AgentRole::Coach, framing.is_ok());
        let framing = framing?;
        transcript.record(AgentRole::Coach, FIRST_ROUND, &framing);
        progress.on_phase_complete(&DebatePhase::Framing);

        // Round 1
        let lite = brief.mode_or_full() == Mode::Lite || input.context.lite_override();
        let specialists = select_specialists(brief.mode_or_full(), input.context.lite_override());
        info!(
            "Debate: round 1 with {} ({})",
            specialists
                .iter()
                .map(AgentRole::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            if lite { "lite" } else { "full" }
        );
        agents_called.extend(specialists.iter().copied());

        let first = self
            .run_round(
                &specialists,
                &framing,
                FIRST_ROUND_MAX_TOKENS,
                DebatePhase::FirstRound,
                progress,
            )
            .await?;
        for (role, content) in &first {
            transcript.record(*role, FIRST_ROUND, content);
        }

        // Round 2
        let mut latest = first.clone();
        let conflict = if lite {
            None
        } else {
            detect_conflict(output_of(&first, AgentRole::Tech), output_of(&first, AgentRole::Biz))
        };
        match conflict {
            Some(kind) => {
                info!("Debate: conflict detected ({:?}), running round 2", kind);
                let digest = PromptTemplate::rebuttal_digest(&first);
                let second = self
                    .run_round(
                        &specialists,
                        &digest,
                        REBUTTAL_MAX_TOKENS,
                        DebatePhase::Rebuttal,
                        progress,
                    )
                    .await?;
                for (role, content) in second {
                    if content.is_empty() {
                        continue;
                    }
                    transcript.record(role, REBUTTAL_ROUND, &content);
                    if let Some(slot) = latest.iter_mut().find(|(r, _)| *r == role) {
                        slot.1 = content;
                    }
                }
            }
            None => debug!("Debate: no conflict, skipping round 2"),
        }

        // Fusion
        let scores = score_from_agents(
            output_of(&latest, AgentRole::Tech),
            output_of(&latest, AgentRole::Biz),
            output_of(&latest, AgentRole::Data),
        );
        info!("Debate: fusion (total score {:.3})", scores.total);
        progress.on_phase_start(&DebatePhase::Fusion, 1);
        let fused = self
            .call(
                AgentRole::Coach,
                &PromptTemplate::fusion(&scores, &latest),
                COACH_MAX_TOKENS,
                progress,
            )
            .await;
        progress.on_agent_complete(&DebatePhase::Fusion, AgentRole::Coach, fused.is_ok());
        let fused = fused?;
        transcript.record(AgentRole::Coach, FUSION_ROUND, &fused);
        progress.on_phase_complete(&DebatePhase::Fusion);

        // Guard
        progress.on_phase_start(&DebatePhase::Guard, 1);
        agents_called.push(AgentRole::Guard);
        let outcome = self.guard.review_with_progress(&fused, progress).await;
        progress.on_agent_complete(
            &DebatePhase::Guard,
            AgentRole::Guard,
            outcome.as_ref().is_ok_and(|o| o.approved),
        );
        let outcome = outcome?;
        progress.on_phase_complete(&DebatePhase::Guard);
        info!(
            "Debate complete: {} transcript entries, guard {}",
            transcript.len(),
            if outcome.patched {
                "patched"
            } else if outcome.approved {
                "approved"
            } else {
                "kept original"
            }
        );

        Ok(DebateResponse {
            reply: outcome.text,
            transcript,
            scores,
            agents_called,
        })
    }

    /// Call every role with the same prompt, honouring the dispatch mode.
    ///
    /// Outputs come back in role order. Concurrent dispatch lets every call
    /// finish before the first error (in role order) is returned.
    async fn run_round(
        &self,
        roles: &[AgentRole],
        prompt: &str,
        max_tokens: u32,
        phase: DebatePhase,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<(AgentRole, String)>, RunDebateError> {
        progress.on_phase_start(&phase, roles.len());

        let outputs = match self.dispatch {
            DispatchMode::Sequential => {
                let mut outputs = Vec::with_capacity(roles.len());
                for &role in roles {
                    let result = self.call(role, prompt, max_tokens, progress).await;
                    progress.on_agent_complete(&phase, role, result.is_ok());
                    outputs.push((role, result?));
                }
                outputs
            }
            DispatchMode::Concurrent => {
                let results = join_all(roles.iter().map(|&role| async move {
                    (role, self.call(role, prompt, max_tokens, progress).await)
                }))
                .await;
                for (role, result) in &results {
                    progress.on_agent_complete(&phase, *role, result.is_ok());
                }
                results
                    .into_iter()
                    .map(|(role, result)| result.map(|text| (role, text)))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        progress.on_phase_complete(&phase);
        Ok(outputs)
    }

    async fn call(
        &self,
        role: AgentRole,
        prompt: &str,
        max_tokens: u32,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, RunDebateError> {
        self.invoker
            .invoke_with_progress(
                self.roster.route(role),
                persona_for(role),
                prompt,
                max_tokens,
                progress,
            )
            .await
            .map_err(|source| RunDebateError::Agent { role, source })
    }
}

fn output_of(outputs: &[(AgentRole, String)], role: AgentRole) -> &str {
    outputs
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, text)| text.as_str())
        .unwrap_or_default()
}
