use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::plan::WeeklyPlan;
use crate::state::AppState;
use crate::weekly_plan::repo;

#[derive(Debug, Deserialize)]
pub struct SavePlanRequest {
    pub plan: Option<Value>,
    pub inputs: Option<Value>,
}

/// GET /api/weekly-plan
///
/// Serializes as JSON `null` until a plan has been saved.
pub async fn handle_get(
    State(state): State<AppState>,
) -> Result<Json<Option<WeeklyPlan>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(store.data.weekly_plan.clone()))
}

/// POST /api/weekly-plan
pub async fn handle_save(
    State(state): State<AppState>,
    Json(req): Json<SavePlanRequest>,
) -> Result<Json<Value>, AppError> {
    let plan = match req.plan {
        Some(plan) if !plan.is_null() => plan,
        _ => return Err(AppError::Validation("plan is required".to_string())),
    };

    let mut store = state.store.lock().await;
    repo::save(&mut store.data, plan, req.inputs);
    store.write()?;
    Ok(Json(json!({ "success": true })))
}
