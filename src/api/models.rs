use serde::{Deserialize, Serialize};

use crate::db::ChatTurn;

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClearRequestBody {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// Answer to `POST /api/chat`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: String,
    pub session_id: String,
}

impl From<&ChatTurn> for ChatReply {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            user_message: turn.user_message.clone(),
            ai_response: turn.ai_response.clone(),
            timestamp: turn.created_at.to_rfc3339(),
            session_id: turn.session_id.clone(),
        }
    }
}

/// One entry of `GET /api/chat/history`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnView {
    pub id: i64,
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: String,
    pub session_id: String,
}

impl From<&ChatTurn> for ChatTurnView {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            id: turn.id,
            user_message: turn.user_message.clone(),
            ai_response: turn.ai_response.clone(),
            timestamp: turn.created_at.to_rfc3339(),
            session_id: turn.session_id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClearReply {
    pub success: bool,
    pub deleted: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
