use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::assignments::repo::{self, AssignmentPatch, NewAssignment};
use crate::errors::AppError;
use crate::models::assignment::{Assignment, Priority};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub estimated_hours: Option<f64>,
}

/// GET /api/assignments
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(repo::sorted(&store.data)))
}

/// POST /api/assignments
///
/// Validation happens before any id is allocated, so a rejected request
/// never advances the counter.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    let title = req.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    let (Some(title), Some(deadline)) = (title, req.deadline) else {
        return Err(AppError::Validation(
            "title and deadline are required".to_string(),
        ));
    };

    let mut store = state.store.lock().await;
    let created = repo::create(
        &mut store.data,
        NewAssignment {
            title,
            deadline,
            subject: req.subject,
            priority: req.priority,
            estimated_hours: req.estimated_hours,
        },
    );
    store.write()?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/assignments/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<AssignmentPatch>,
) -> Result<Json<Assignment>, AppError> {
    let mut store = state.store.lock().await;
    let updated = repo::apply_patch(&mut store.data, id, patch)
        .ok_or_else(|| AppError::NotFound(format!("Assignment {id} not found")))?;
    store.write()?;
    Ok(Json(updated))
}

/// DELETE /api/assignments/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let mut store = state.store.lock().await;
    if !repo::remove(&mut store.data, id) {
        return Err(AppError::NotFound(format!("Assignment {id} not found")));
    }
    store.write()?;
    Ok(Json(json!({ "success": true })))
}
