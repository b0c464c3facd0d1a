//! HTTP surface of the proxy.
//!
//! One chat route plus a liveness endpoint, with permissive CORS. All
//! failures surface as the JSON bodies defined in `models::ErrorResponse`;
//! nothing propagates past the handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::ai::ChatService;
use crate::models::{ChatRequest, ChatResponse, Content};
use crate::{Error, Result};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chat backend; `None` when no credential resolved at startup.
    pub chat: Option<Arc<dyn ChatService>>,
}

/// Builds the router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat).fallback(method_not_allowed))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

async fn chat(
    State(state): State<AppState>,
    request: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    // An unreadable body is treated the same as a body without a message.
    let request = request.map(|Json(r)| r).unwrap_or(ChatRequest {
        message: None,
        conversation_history: None,
    });

    let message = match request.message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(Error::BadRequest("Message is required".to_string())),
    };

    let chat = state
        .chat
        .clone()
        .ok_or_else(|| Error::Config("no Gemini credential resolved".to_string()))?;

    // A supplied history is the full conversation and goes upstream as-is.
    let contents = request
        .conversation_history
        .unwrap_or_else(|| vec![Content::user(message)]);

    info!("chat request ({} turns)", contents.len());

    let reply = chat.generate_reply(contents).await?;
    Ok(Json(ChatResponse { response: reply }))
}
