use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
    pub progress: u32,
    pub estimated_hours: f64,
    pub created_at: DateTime<Utc>,
}
