//! Habit collection: the last-7-day read view and the per-(habit, date)
//! log upsert. Habits themselves are seeded and fixed; only their daily
//! values change.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::document::Document;
use crate::models::habit::HabitLog;

/// Read-time shape: static habit fields plus a window of the most recent
/// 7 logs in ascending date order, with a parallel plain value array.
/// Truncation is presentation shaping only; storage keeps full history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub unit: String,
    pub target: f64,
    pub color: String,
    pub logs: Vec<HabitLog>,
    pub values: Vec<f64>,
}

pub fn overview(doc: &Document) -> Vec<HabitView> {
    doc.habits
        .iter()
        .map(|h| {
            let mut logs = h.logs.clone();
            logs.sort_by(|a, b| b.date.cmp(&a.date));
            logs.truncate(7);
            logs.reverse(); // oldest first
            let values = logs.iter().map(|l| l.value).collect();
            HabitView {
                id: h.id,
                name: h.name.clone(),
                icon: h.icon.clone(),
                unit: h.unit.clone(),
                target: h.target,
                color: h.color.clone(),
                logs,
                values,
            }
        })
        .collect()
}

/// Upsert keyed on (habit, date): overwrite the value if an entry for that
/// date exists, append otherwise. Returns false if the habit id is unknown.
pub fn log_day(doc: &mut Document, habit_id: u64, date: NaiveDate, value: f64) -> bool {
    let Some(habit) = doc.habits.iter_mut().find(|h| h.id == habit_id) else {
        return false;
    };
    match habit.logs.iter_mut().find(|l| l.date == date) {
        Some(log) => log.value = value,
        None => habit.logs.push(HabitLog { date, value }),
    }
    true
}
