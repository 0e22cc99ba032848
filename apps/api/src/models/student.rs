use serde::{Deserialize, Serialize};

/// Singleton profile record. Never created or deleted, only patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub avatar: String,
    pub major: String,
    pub year: String,
    pub university: String,
    pub productivity_score: u32,
    pub streak_days: u32,
    pub focus_hours_today: f64,
    pub total_tasks_done: u32,
}
