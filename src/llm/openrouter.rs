use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;

use crate::llm::{
    models::{CompletionOptions, Message},
    AiGateway, GatewayError,
};

pub struct OpenRouterGateway {
    client: Client,
    api_key: String,
    base_url: String,
    options: CompletionOptions,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterGateway {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            options: CompletionOptions::default(),
            referer: None,
            title: None,
        }
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// OpenRouter ranks apps by these optional headers.
    pub fn with_attribution(mut self, referer: String, title: String) -> Self {
        self.referer = Some(referer).filter(|r| !r.is_empty());
        self.title = Some(title).filter(|t| !t.is_empty());
        self
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Unavailable(e.to_string())
    }
}

/// Pulls `choices[0].message.content` out of a chat-completion payload.
pub fn extract_completion(body: &str) -> Result<String, GatewayError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;

    let content = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| GatewayError::Malformed("missing choices[0].message.content".to_string()))?;

    if content.trim().is_empty() {
        return Err(GatewayError::Malformed("empty completion".to_string()));
    }
    Ok(content.to_string())
}

#[async_trait]
impl AiGateway for OpenRouterGateway {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
        timeout: Duration,
    ) -> Result<String, GatewayError> {
        if self.api_key.is_empty() {
            return Err(GatewayError::Unconfigured);
        }

        let messages = vec![Message::system(system_prompt), Message::user(user_message)];

        let body = json!({
            "model": self.options.model,
            "messages": messages,
            "max_tokens": self.options.max_tokens,
            "temperature": self.options.temperature,
        });

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");
        if let Some(referer) = &self.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            request = request.header("X-Title", title);
        }

        let response = request.json(&body).send().await.map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            return Err(GatewayError::Unavailable(format!("OpenRouter Error {}: {}", status, text)));
        }

        extract_completion(&text)
    }
}
