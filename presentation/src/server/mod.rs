//! HTTP binding for the chat service
//!
//! - `POST /api/chat`: one intake or debate turn
//! - `GET /health`: liveness probe

pub mod error;

pub use error::ApiError;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use council_application::{ChatService, LlmGateway};
use council_domain::{ChatRequest, ChatResponse};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Build the router around a shared chat service
pub fn router<G: LlmGateway + 'static>(service: Arc<ChatService<G>>) -> Router {
    Router::new()
        .route("/api/chat", post(chat::<G>))
        .route("/health", get(health_check))
        .with_state(service)
        .layer(cors())
}

/// Bind `addr` and serve the router until the process exits
pub async fn serve<G: LlmGateway + 'static>(
    service: Arc<ChatService<G>>,
    addr: &str,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service)).await
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600))
}

async fn chat<G: LlmGateway + 'static>(
    State(service): State<Arc<ChatService<G>>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let response = service.handle(request).await?;
    Ok(Json(response))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
