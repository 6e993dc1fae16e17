//! Run Intake use case
//!
//! One facilitator turn: build or refine the brief from the user's message.

use crate::config::CouncilConfig;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::invoke_model::{InvokeError, ModelInvoker};
use council_domain::prompt::personas::FACILITATOR;
use council_domain::prompt::template::DEFAULT_BRIEF_CONFIRMATION;
use council_domain::{
    FacilitatorReply, IntakeContext, IntakeHint, IntakePolicy, IntakeResponse, ModelRoute,
    PromptTemplate, UserMessage, default_brief, extract_brief_block, extract_signals,
    normalize_brief,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Output budget of a facilitator turn
pub const FACILITATOR_MAX_TOKENS: u32 = 450;

/// Errors that can occur during an intake turn
#[derive(Error, Debug)]
pub enum RunIntakeError {
    #[error("Facilitator failed: {0}")]
    Facilitator(#[from] InvokeError),
}

/// Input for the RunIntake use case
#[derive(Debug, Clone)]
pub struct RunIntakeInput {
    pub message: UserMessage,
    /// Context as echoed by the caller (counter not yet advanced)
    pub context: IntakeContext,
}

impl RunIntakeInput {
    pub fn new(message: UserMessage, context: IntakeContext) -> Self {
        Self { message, context }
    }
}

/// Use case for running one intake turn
pub struct RunIntakeUseCase<G: LlmGateway + 'static> {
    invoker: ModelInvoker<G>,
    route: ModelRoute,
    policy: IntakePolicy,
}

impl<G: LlmGateway + 'static> RunIntakeUseCase<G> {
    pub fn new(gateway: Arc<G>, config: &CouncilConfig) -> Self {
        Self {
            invoker: ModelInvoker::new(gateway, *config.retry()),
            route: config.roster().facilitator.clone(),
            policy: *config.intake(),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunIntakeInput) -> Result<IntakeResponse, RunIntakeError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case, reporting facilitator retries to `progress`
    pub async fn execute_with_progress(
        &self,
        input: RunIntakeInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<IntakeResponse, RunIntakeError> {
        let context = input.context.next_turn();
        let turns = context.turns();
        let message = input.message.content();
        info!("Intake turn {}", turns);

        let signals = extract_signals(message);
        debug!("Signals: {:?}", signals);

        let prompt = PromptTemplate::facilitator(&context, message);
        let raw = self
            .invoker
            .invoke_with_progress(
                &self.route,
                FACILITATOR,
                &prompt,
                FACILITATOR_MAX_TOKENS,
                progress,
            )
            .await?;

        let FacilitatorReply { brief, mut text } = extract_brief_block(&raw);
        let brief = match brief {
            Some(brief) => Some(brief),
            None if self.policy.should_commit(turns) => {
                info!("No brief after {} turns, proposing a default one", turns);
                append_paragraph(&mut text, DEFAULT_BRIEF_CONFIRMATION);
                Some(default_brief(&context))
            }
            None => None,
        };

        let normalized = normalize_brief(brief, &signals, &context);

        let (hint, brief) = if normalized.needs_clarification {
            if let Some(clarification) = &normalized.clarification {
                append_paragraph(&mut text, clarification);
            }
            (IntakeHint::NeedsFix, Some(normalized.brief))
        } else if normalized.brief.is_complete() {
            (IntakeHint::Ready, Some(normalized.brief))
        } else {
            (IntakeHint::Intake, None)
        };
        info!("Intake turn {} -> {}", turns, hint);

        Ok(IntakeResponse {
            reply: text,
            brief,
            next_phase_hint: hint,
            context_echo: context,
        })
    }
}

fn append_paragraph(text: &mut String, paragraph: &str) {
    if !text.is_empty() {
        text.push_str("\n\n");
    }
    text.push_str(paragraph);
}
