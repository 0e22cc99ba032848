use chrono::Utc;
use serde_json::{Map, Value};

use crate::models::document::Document;
use crate::models::plan::WeeklyPlan;

/// Wholesale overwrite; there is no partial update for the plan.
pub fn save(doc: &mut Document, plan: Value, inputs: Option<Value>) {
    doc.weekly_plan = Some(WeeklyPlan {
        plan,
        inputs: inputs.unwrap_or_else(|| Value::Object(Map::new())),
        generated_at: Utc::now(),
    });
}
