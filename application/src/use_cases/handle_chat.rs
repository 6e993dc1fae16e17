//! Chat service
//!
//! Single entry point behind `/api/chat` and the CLI: validates the
//! request, checks the gateway is usable, and dispatches on the phase.

use crate::config::CouncilConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::run_debate::{RunDebateError, RunDebateInput, RunDebateUseCase};
use crate::use_cases::run_intake::{RunIntakeError, RunIntakeInput, RunIntakeUseCase};
use council_domain::{ChatCommand, ChatRequest, ChatResponse, DomainError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced to callers of [`ChatService`]
#[derive(Error, Debug)]
pub enum ChatError {
    /// The request itself is malformed
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    /// The server cannot reach the model provider at all
    #[error("Server misconfigured: {0}")]
    Misconfigured(#[source] GatewayError),

    #[error(transparent)]
    Intake(#[from] RunIntakeError),

    #[error(transparent)]
    Debate(#[from] RunDebateError),
}

impl ChatError {
    /// Whether the caller (rather than the server or provider) is at fault
    pub fn is_input_error(&self) -> bool {
        matches!(self, ChatError::InvalidInput(_))
    }
}

/// Phase dispatcher shared by every request
pub struct ChatService<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    intake: RunIntakeUseCase<G>,
    debate: RunDebateUseCase<G>,
}

impl<G: LlmGateway + 'static> ChatService<G> {
    pub fn new(gateway: Arc<G>, config: &CouncilConfig) -> Self {
        Self {
            intake: RunIntakeUseCase::new(Arc::clone(&gateway), config),
            debate: RunDebateUseCase::new(Arc::clone(&gateway), config),
            gateway,
        }
    }

    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        self.handle_with_progress(request, &NoProgress).await
    }

    pub async fn handle_with_progress(
        &self,
        request: ChatRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<ChatResponse, ChatError> {
        let command = request.into_command()?;
        self.gateway
            .ensure_ready()
            .map_err(ChatError::Misconfigured)?;

        match command {
            ChatCommand::Intake { message, context } => {
                info!("Handling intake turn");
                let response = self
                    .intake
                    .execute_with_progress(RunIntakeInput::new(message, context), progress)
                    .await?;
                Ok(response.into())
            }
            ChatCommand::Debate {
                message,
                context,
                brief,
            } => {
                info!("Handling debate turn");
                let mut input = RunDebateInput::new(message, context);
                if let Some(brief) = brief {
                    input = input.with_brief(brief);
                }
                let response = self.debate.execute_with_progress(input, progress).await?;
                Ok(response.into())
            }
        }
    }
}
