use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{api::state::AppState, domain::Message, error::Result};

/// Only sender and content are taken from the client; any timestamp in the
/// body is ignored and replaced server-side.
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub sender: String,
    pub content: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Message>>> {
    let messages = state.service_context.message_service.list().await?;

    Ok(Json(messages))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<Message>> {
    let message = state
        .service_context
        .message_service
        .post(request.sender, request.content)
        .await?;

    Ok(Json(message))
}

pub async fn delete_latest(State(state): State<AppState>) -> Result<StatusCode> {
    state.service_context.message_service.delete_latest().await?;

    Ok(StatusCode::OK)
}
