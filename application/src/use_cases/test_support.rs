//! Scripted gateway shared by the use case tests

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Replies from per-persona scripts, keyed by the system instruction.
///
/// Unscripted calls fail with `InvalidResponse`.
pub(crate) struct ScriptedGateway {
    scripts: Mutex<HashMap<String, VecDeque<Result<String, GatewayError>>>>,
    calls: Mutex<Vec<CompletionRequest>>,
    credential_missing: bool,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            credential_missing: false,
        }
    }

    pub(crate) fn with_script(
        mut self,
        system: &str,
        responses: Vec<Result<String, GatewayError>>,
    ) -> Self {
        self.scripts
            .get_mut()
            .unwrap()
            .entry(system.to_string())
            .or_default()
            .extend(responses);
        self
    }

    pub(crate) fn reply(self, system: &str, text: &str) -> Self {
        self.with_script(system, vec![Ok(text.to_string())])
    }

    pub(crate) fn without_credential(mut self) -> Self {
        self.credential_missing = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_for(&self, system: &str) -> Vec<CompletionRequest> {
        self.calls()
            .into_iter()
            .filter(|c| c.system == system)
            .collect()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(request.clone());
        self.scripts
            .lock()
            .unwrap()
            .get_mut(&request.system)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| {
                Err(GatewayError::InvalidResponse(format!(
                    "no scripted response for {}",
                    request.model
                )))
            })
    }

    fn ensure_ready(&self) -> Result<(), GatewayError> {
        if self.credential_missing {
            Err(GatewayError::MissingCredential("GROQ_API_KEY".to_string()))
        } else {
            Ok(())
        }
    }
}

pub(crate) fn transient() -> Result<String, GatewayError> {
    Err(GatewayError::RequestFailed {
        status: 503,
        body: "service unavailable".to_string(),
    })
}
