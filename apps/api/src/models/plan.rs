use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nullable singleton. The plan and inputs are opaque client-shaped JSON;
/// the server only stamps `generated_at` and stores them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub plan: Value,
    pub inputs: Value,
    pub generated_at: DateTime<Utc>,
}
