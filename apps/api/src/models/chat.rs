use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed greeting the history resets to when cleared.
pub const WELCOME_TEXT: &str = "👋 Hi Soham! I'm your AI Mentor. I can help you with study planning, overcoming stress, optimizing your schedule, and exam prep. What would you like help with today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    /// Display clock string, e.g. "02:15 PM". Kept as text because the
    /// client renders it verbatim.
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// The seeded welcome message: always id 1 with a fixed display time.
    pub fn welcome() -> Self {
        Self {
            id: 1,
            role: ChatRole::Ai,
            content: WELCOME_TEXT.to_string(),
            time: "12:01 PM".to_string(),
            created_at: Utc::now(),
        }
    }
}
