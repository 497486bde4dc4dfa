use chrono::{DateTime, Utc};

/// Session used when a client does not name one.
pub const DEFAULT_SESSION: &str = "default";

/// One persisted user-message / AI-response exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub id: i64,
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
    pub created_at: DateTime<Utc>,
}

/// A turn that has not been written yet; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewChatTurn {
    pub session_id: String,
    pub user_message: String,
    pub ai_response: String,
}
