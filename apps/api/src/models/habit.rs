use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub unit: String,
    pub target: f64,
    pub color: String,
    /// Full history; at most one entry per date (see `habits::repo::log_day`).
    pub logs: Vec<HabitLog>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitLog {
    pub date: NaiveDate,
    pub value: f64,
}
