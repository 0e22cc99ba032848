use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One mood entry per calendar date; uniqueness is enforced by the
/// upsert in `mood::repo`, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodLog {
    pub id: u64,
    pub date: NaiveDate,
    pub mood: String,
    pub mood_score: i32,
    pub energy: i32,
    pub note: String,
    pub stress: i32,
    pub created_at: DateTime<Utc>,
}
