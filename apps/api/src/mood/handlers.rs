use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::mood::MoodLog;
use crate::mood::repo::{self, NewMoodLog};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodLogRequest {
    pub date: Option<NaiveDate>,
    pub mood: Option<String>,
    pub mood_score: Option<i32>,
    pub energy: Option<i32>,
    pub note: Option<String>,
    pub stress: Option<i32>,
}

/// GET /api/mood
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<MoodLog>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(repo::sorted(&store.data)))
}

/// POST /api/mood
///
/// Upserts the entry for the given date; see `repo::upsert`.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateMoodLogRequest>,
) -> Result<(StatusCode, Json<MoodLog>), AppError> {
    let (Some(date), Some(mood), Some(mood_score), Some(energy)) =
        (req.date, req.mood, req.mood_score, req.energy)
    else {
        return Err(AppError::Validation(
            "date, mood, moodScore and energy are required".to_string(),
        ));
    };

    let mut store = state.store.lock().await;
    let created = repo::upsert(
        &mut store.data,
        NewMoodLog {
            date,
            mood,
            mood_score,
            energy,
            note: req.note,
            stress: req.stress,
        },
    );
    store.write()?;
    Ok((StatusCode::CREATED, Json(created)))
}
