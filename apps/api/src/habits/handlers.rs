use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::habits::repo::{self, HabitView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDayRequest {
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDayResponse {
    pub success: bool,
    pub habit_id: u64,
    pub date: NaiveDate,
    pub value: f64,
}

/// GET /api/habits
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<HabitView>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(repo::overview(&store.data)))
}

/// PATCH /api/habits/:id/log
pub async fn handle_log_day(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<LogDayRequest>,
) -> Result<Json<LogDayResponse>, AppError> {
    let (Some(date), Some(value)) = (req.date, req.value) else {
        return Err(AppError::Validation(
            "date and value are required".to_string(),
        ));
    };

    let mut store = state.store.lock().await;
    if !repo::log_day(&mut store.data, id, date, value) {
        return Err(AppError::NotFound(format!("Habit {id} not found")));
    }
    store.write()?;
    Ok(Json(LogDayResponse {
        success: true,
        habit_id: id,
        date,
        value,
    }))
}
