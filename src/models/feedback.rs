use chrono::Local;
use serde::{Deserialize, Serialize};

/// Append-only feedback note. Never mutated or deleted by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: i64,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl FeedbackEntry {
    pub fn new(message: &str) -> Self {
        let now = Local::now();
        Self {
            id: now.timestamp_millis(),
            message: message.trim().to_string(),
            created_at: now.to_rfc3339(),
        }
    }
}
