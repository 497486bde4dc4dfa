use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// OpenRouter (OpenAI-compatible) completion endpoint settings.
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub referer: String,
    pub title: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    pub max_message_chars: usize,
    pub gateway_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 2000,
            gateway_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub chat: ChatConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("database.path", "portfolio.duckdb")?
            .set_default("llm.api_base", "https://openrouter.ai/api/v1")?
            .set_default("llm.api_key", "${OPENROUTER_API_KEY}")?
            .set_default("llm.model", "openai/gpt-3.5-turbo")?
            .set_default("llm.max_tokens", 500_i64)?
            .set_default("llm.temperature", 0.7_f64)?
            .set_default("llm.referer", "https://portfolio-ai-chat.vercel.app")?
            .set_default("llm.title", "Portfolio AI Chat")?
            .set_default("chat.max_message_chars", 2000_i64)?
            .set_default("chat.gateway_timeout_secs", 30_i64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FOLIOCHAT").separator("__"))
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;

        // Expand environment variables if present like ${OPENROUTER_API_KEY}
        app_config.server.host = expand_env(&app_config.server.host);
        app_config.database.path = expand_env(&app_config.database.path);
        app_config.llm.api_key = expand_env(&app_config.llm.api_key).trim().to_string();

        Ok(app_config)
    }

    /// Whether a credential is present, i.e. the AI gateway should be tried.
    pub fn gateway_configured(&self) -> bool {
        !self.llm.api_key.is_empty()
    }
}

fn expand_env(val: &str) -> String {
    match val.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        Some(var_name) => std::env::var(var_name).unwrap_or_default(),
        None => val.to_string(),
    }
}
