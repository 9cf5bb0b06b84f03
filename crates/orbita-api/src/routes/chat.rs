use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use orbita_agent::Turn;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub thread_id: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub thread_id: String,
    pub total_messages: usize,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
}

/// Relay one user message through the hosted agent
///
/// Loads the thread's history, appends the user turn, sends the full
/// dialogue to the agent, appends the reply and persists the whole sequence
/// back (upsert, last write wins). The reply may legitimately be empty.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let mut turns = state.history.load(&payload.thread_id).await?;
    turns.push(Turn::user(payload.content));

    let reply = state.agent.invoke(&turns).await?;
    turns.push(Turn::assistant(reply.clone()));

    state
        .history
        .save(&payload.thread_id, &payload.user_id, &turns)
        .await?;

    tracing::info!(
        "Chat turn completed for thread {} ({} messages)",
        payload.thread_id,
        turns.len()
    );

    Ok(Json(ChatResponse {
        response: reply,
        thread_id: payload.thread_id,
        total_messages: turns.len(),
    }))
}

/// Forget a thread's history
///
/// Unknown threads reset just as successfully as existing ones.
pub async fn reset_thread(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ResetResponse>> {
    state.history.delete(&thread_id).await?;

    tracing::info!("Conversation reset for thread {}", thread_id);

    Ok(Json(ResetResponse {
        message: "Conversa resetada com sucesso".to_string(),
    }))
}
