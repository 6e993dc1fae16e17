//! Model invocation with retry, back-off and fallback
//!
//! Every external model call in the council goes through [`ModelInvoker`].

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::{Model, ModelRoute, RetryPolicy, parse_retry_after};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned once every attempt has failed
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("{model} failed after {attempts} attempts: {source}")]
    Exhausted {
        model: Model,
        attempts: u32,
        #[source]
        source: GatewayError,
    },
}

impl InvokeError {
    /// The error of the final attempt
    pub fn last_error(&self) -> &GatewayError {
        match self {
            InvokeError::Exhausted { source, .. } => source,
        }
    }
}

/// Calls a model route under a [`RetryPolicy`].
///
/// Attempts exhaust the primary model before moving to the fallback.
/// Every failed attempt is followed by a back-off sleep, the last one
/// included.
pub struct ModelInvoker<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    policy: RetryPolicy,
}

impl<G: LlmGateway + 'static> ModelInvoker<G> {
    pub fn new(gateway: Arc<G>, policy: RetryPolicy) -> Self {
        Self { gateway, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Invoke with default (no-op) progress
    pub async fn invoke(
        &self,
        route: &ModelRoute,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, InvokeError> {
        self.invoke_with_progress(route, system, prompt, max_tokens, &NoProgress)
            .await
    }

    /// Invoke, reporting every back-off to `progress`
    pub async fn invoke_with_progress(
        &self,
        route: &ModelRoute,
        system: &str,
        prompt: &str,
        max_tokens: u32,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, InvokeError> {
        let models = route.models();
        let total = self.policy.total_attempts(models.len());
        let mut last_failure: Option<(Model, GatewayError)> = None;

        for attempt in 0..total {
            let model = models[self.policy.model_index(attempt, models.len())];
            debug!(
                "Calling {} (attempt {}/{}, prompt {} chars, max {} tokens)",
                model,
                attempt + 1,
                total,
                prompt.chars().count(),
                max_tokens
            );

            let request = CompletionRequest::new(model.clone(), system, prompt, max_tokens);
            match self.gateway.complete(request).await {
                Ok(text) => {
                    if attempt > 0 {
                        info!("{} succeeded on attempt {}", model, attempt + 1);
                    }
                    return Ok(text);
                }
                Err(error) => {
                    let retry_after = if error.is_rate_limited() {
                        error.raw_body().and_then(parse_retry_after)
                    } else {
                        None
                    };
                    let jitter = draw_jitter(self.policy.max_jitter);
                    let delay =
                        self.policy
                            .delay_after(attempt, error.failure_kind(), retry_after, jitter);

                    warn!(
                        "{} attempt {}/{} failed: {} (backing off {:?})",
                        model,
                        attempt + 1,
                        total,
                        error,
                        delay
                    );
                    progress.on_retry(model, attempt + 1, delay);
                    tokio::time::sleep(delay).await;

                    last_failure = Some((model.clone(), error));
                }
            }
        }

        let (model, source) = last_failure.unwrap_or_else(|| {
            (
                route.primary.clone(),
                GatewayError::InvalidResponse("no attempt was made".to_string()),
            )
        });
        Err(InvokeError::Exhausted {
            model,
            attempts: total,
            source,
        })
    }
}

fn draw_jitter(max: Duration) -> Duration {
    let max_ms = max.as_millis() as u64;
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{ScriptedGateway, transient};
    use tokio::time::Instant;

    const SYSTEM: &str = "system";

    fn route_with_fallback() -> ModelRoute {
        ModelRoute::new(Model::GptOss120b).with_fallback(Model::GptOss20b)
    }

    fn rate_limited(body: &str) -> Result<String, GatewayError> {
        Err(GatewayError::RateLimited {
            body: body.to_string(),
        })
    }

    fn invoker(gateway: ScriptedGateway) -> (Arc<ScriptedGateway>, ModelInvoker<ScriptedGateway>) {
        let gateway = Arc::new(gateway);
        let invoker = ModelInvoker::new(Arc::clone(&gateway), RetryPolicy::default());
        (gateway, invoker)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_does_not_sleep() {
        let (gateway, invoker) = invoker(ScriptedGateway::new().reply(SYSTEM, "hola"));
        let start = Instant::now();

        let text = invoker
            .invoke(&route_with_fallback(), SYSTEM, "prompt", 550)
            .await
            .unwrap();

        assert_eq!(text, "hola");
        assert_eq!(start.elapsed(), Duration::ZERO);
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, Model::GptOss120b);
        assert_eq!(calls[0].max_tokens, 550);
        assert_eq!(calls[0].prompt, "prompt");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_only_after_primary_exhausted() {
        let gateway = ScriptedGateway::new().with_script(
            SYSTEM,
            vec![transient(), transient(), transient(), Ok("fallback".to_string())],
        );
        let (gateway, invoker) = invoker(gateway);
        let start = Instant::now();

        let text = invoker
            .invoke(&route_with_fallback(), SYSTEM, "prompt", 550)
            .await
            .unwrap();

        assert_eq!(text, "fallback");
        let models: Vec<_> = gateway.calls().into_iter().map(|c| c.model).collect();
        assert_eq!(
            models,
            vec![
                Model::GptOss120b,
                Model::GptOss120b,
                Model::GptOss120b,
                Model::GptOss20b
            ]
        );
        // 250 + 500 + 750 ms of linear back-off
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_with_fallback_makes_six_attempts() {
        let gateway = ScriptedGateway::new().with_script(SYSTEM, (0..10).map(|_| transient()).collect());
        let (gateway, invoker) = invoker(gateway);
        let start = Instant::now();

        let err = invoker
            .invoke(&route_with_fallback(), SYSTEM, "prompt", 550)
            .await
            .unwrap_err();

        let InvokeError::Exhausted {
            model, attempts, ..
        } = &err;
        assert_eq!(*attempts, 6);
        assert_eq!(*model, Model::GptOss20b);
        assert_eq!(gateway.calls().len(), 6);
        assert!(!err.last_error().is_rate_limited());
        // Sleeps after every failure, the last one included: 250 * (1 + ... + 6)
        assert_eq!(start.elapsed(), Duration::from_millis(5250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_without_fallback_makes_three_attempts() {
        let gateway = ScriptedGateway::new().with_script(SYSTEM, (0..10).map(|_| transient()).collect());
        let (gateway, invoker) = invoker(gateway);

        let result = invoker
            .invoke(&ModelRoute::new(Model::Llama31_8bInstant), SYSTEM, "p", 450)
            .await;

        assert!(result.is_err());
        assert!(
            gateway
                .calls()
                .iter()
                .all(|c| c.model == Model::Llama31_8bInstant)
        );
        assert_eq!(gateway.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_honours_retry_hint() {
        let gateway = ScriptedGateway::new().with_script(
            SYSTEM,
            vec![
                rate_limited("Rate limit reached. Please try again in 1.5s."),
                Ok("ok".to_string()),
            ],
        );
        let (_gateway, invoker) = invoker(gateway);
        let start = Instant::now();

        invoker
            .invoke(&route_with_fallback(), SYSTEM, "p", 100)
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_without_hint_backs_off_exponentially() {
        let gateway = ScriptedGateway::new().with_script(
            SYSTEM,
            vec![
                rate_limited("slow down"),
                rate_limited("slow down"),
                Ok("ok".to_string()),
            ],
        );
        let (_gateway, invoker) = invoker(gateway);
        let start = Instant::now();

        invoker
            .invoke(&route_with_fallback(), SYSTEM, "p", 100)
            .await
            .unwrap();

        // 400 + 800 ms plus two jitters below 200 ms each
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1200));
        assert!(elapsed < Duration::from_millis(1600));
    }

    #[test]
    fn test_draw_jitter_bounds() {
        for _ in 0..100 {
            assert!(draw_jitter(Duration::from_millis(200)) < Duration::from_millis(200));
        }
        assert_eq!(draw_jitter(Duration::ZERO), Duration::ZERO);
    }
}
