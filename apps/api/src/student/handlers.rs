use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::student::Student;
use crate::state::AppState;
use crate::student::repo::{self, StudentPatch};

/// GET /api/student
pub async fn handle_get(State(state): State<AppState>) -> Result<Json<Student>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.data.student.clone()))
}

/// PATCH /api/student
pub async fn handle_update(
    State(state): State<AppState>,
    Json(patch): Json<StudentPatch>,
) -> Result<Json<Student>, AppError> {
    let mut store = state.store.lock().await;
    let updated = repo::apply_patch(&mut store.data, patch);
    store.write()?;
    Ok(Json(updated))
}
