pub mod models;
pub mod openrouter;

use openrouter::OpenRouterGateway;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use models::CompletionOptions;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("No API key configured")]
    Unconfigured,
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
    #[error("Upstream timed out")]
    Timeout,
    #[error("Malformed upstream payload: {0}")]
    Malformed(String),
}

/// One-shot completion against an external chat model.
#[async_trait]
pub trait AiGateway: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError>;
}

pub struct GatewayFactory;

impl GatewayFactory {
    /// `None` means fallback-only mode: no credential was configured.
    pub fn create_default(config: &AppConfig) -> Option<Arc<dyn AiGateway>> {
        if !config.gateway_configured() {
            info!("No LLM API key configured; answering with the keyword fallback only");
            return None;
        }

        let llm = &config.llm;
        info!("Using {} via {}", llm.model, llm.api_base);
        Some(Arc::new(
            OpenRouterGateway::new(llm.api_key.clone(), llm.api_base.clone())
                .with_options(CompletionOptions {
                    model: llm.model.clone(),
                    temperature: llm.temperature,
                    max_tokens: llm.max_tokens,
                })
                .with_attribution(llm.referer.clone(), llm.title.clone()),
        ))
    }
}
