pub mod health;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::{assignments, chat, habits, mood, student, weekly_plan};

async fn not_found() -> AppError {
    AppError::NotFound("no route matched".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/assignments",
            get(assignments::handlers::handle_list).post(assignments::handlers::handle_create),
        )
        .route(
            "/api/assignments/:id",
            patch(assignments::handlers::handle_update).delete(assignments::handlers::handle_delete),
        )
        .route(
            "/api/mood",
            get(mood::handlers::handle_list).post(mood::handlers::handle_create),
        )
        .route("/api/habits", get(habits::handlers::handle_list))
        .route("/api/habits/:id/log", patch(habits::handlers::handle_log_day))
        .route(
            "/api/chat",
            get(chat::handlers::handle_list)
                .post(chat::handlers::handle_create)
                .delete(chat::handlers::handle_clear),
        )
        .route(
            "/api/student",
            get(student::handlers::handle_get).patch(student::handlers::handle_update),
        )
        .route(
            "/api/weekly-plan",
            get(weekly_plan::handlers::handle_get).post(weekly_plan::handlers::handle_save),
        )
        .fallback(not_found)
        .with_state(state)
}
