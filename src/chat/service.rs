use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::chat::fallback::FallbackResponder;
use crate::config::ChatConfig;
use crate::db::{ChatStore, ChatTurn, NewChatTurn, StorageError, DEFAULT_SESSION};
use crate::llm::AiGateway;
use crate::portfolio;

const MAX_SESSION_ID_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

/// Runs one chat exchange: validate, answer (gateway or fallback), persist.
///
/// Holds no per-request state; everything durable goes through the store.
pub struct ChatService {
    store: Arc<dyn ChatStore>,
    gateway: Option<Arc<dyn AiGateway>>,
    fallback: FallbackResponder,
    system_prompt: String,
    max_message_chars: usize,
    gateway_timeout: Duration,
}

impl ChatService {
    pub fn new(
        store: Arc<dyn ChatStore>,
        gateway: Option<Arc<dyn AiGateway>>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            fallback: FallbackResponder::new(),
            system_prompt: portfolio::system_prompt(portfolio::PORTFOLIO_DATA),
            max_message_chars: config.max_message_chars,
            gateway_timeout: Duration::from_secs(config.gateway_timeout_secs),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub async fn chat(&self, request: ChatRequest) -> Result<ChatTurn, ChatError> {
        self.validate_message(&request.message)?;
        let session_id = resolve_session(request.session_id.as_deref())?;

        let history = self.store.list_by_session(&session_id)?;
        debug!("Session {} has {} prior turns", session_id, history.len());

        let ai_response = self.respond(&request.message).await;

        let turn = self.store.append(NewChatTurn {
            session_id,
            user_message: request.message,
            ai_response,
        })?;
        Ok(turn)
    }

    pub fn history(&self, session_id: Option<&str>) -> Result<Vec<ChatTurn>, ChatError> {
        let session_id = resolve_session(session_id)?;
        Ok(self.store.list_by_session(&session_id)?)
    }

    pub fn clear_history(&self, session_id: Option<&str>) -> Result<usize, ChatError> {
        let session_id = resolve_session(session_id)?;
        Ok(self.store.clear_session(&session_id)?)
    }

    fn validate_message(&self, message: &str) -> Result<(), ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::Validation("Empty message".to_string()));
        }
        if message.chars().count() > self.max_message_chars {
            return Err(ChatError::Validation(format!(
                "Message exceeds {} characters",
                self.max_message_chars
            )));
        }
        Ok(())
    }

    /// Never fails: any gateway error degrades to the keyword fallback.
    async fn respond(&self, message: &str) -> String {
        let Some(gateway) = &self.gateway else {
            return self.fallback.respond(message).to_string();
        };

        match gateway
            .complete(&self.system_prompt, message, self.gateway_timeout)
            .await
        {
            Ok(content) if !content.trim().is_empty() => content,
            Ok(_) => {
                warn!("{} gateway returned an empty answer, using fallback", gateway.name());
                self.fallback.respond(message).to_string()
            }
            Err(e) => {
                warn!("{} gateway failed, using fallback: {}", gateway.name(), e);
                self.fallback.respond(message).to_string()
            }
        }
    }
}

fn resolve_session(session_id: Option<&str>) -> Result<String, ChatError> {
    let session_id = match session_id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_SESSION,
    };
    if session_id.chars().count() > MAX_SESSION_ID_CHARS {
        return Err(ChatError::Validation(format!(
            "Session id exceeds {} characters",
            MAX_SESSION_ID_CHARS
        )));
    }
    Ok(session_id.to_string())
}
