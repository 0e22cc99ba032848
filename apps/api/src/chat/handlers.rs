use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::chat::repo::{self, NewChatMessage};
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ChatRole};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateChatMessageRequest {
    pub role: Option<ChatRole>,
    pub content: Option<String>,
    pub time: Option<String>,
}

/// GET /api/chat
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(repo::sorted(&store.data)))
}

/// POST /api/chat
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateChatMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), AppError> {
    let (Some(role), Some(content)) = (req.role, req.content) else {
        return Err(AppError::Validation(
            "role and content are required".to_string(),
        ));
    };

    let mut store = state.store.lock().await;
    let created = repo::append(
        &mut store.data,
        NewChatMessage {
            role,
            content,
            time: req.time,
        },
    );
    store.write()?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/chat
pub async fn handle_clear(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut store = state.store.lock().await;
    repo::clear(&mut store.data);
    store.write()?;
    Ok(Json(json!({ "success": true })))
}
