use std::env;

use async_trait::async_trait;
use g3_core::model::{InferenceSettings, InferenceSettingsDraft};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::InferenceError;

const DEFAULT_MODEL: &str = "phi-3-mini";

/// Text generation backend used for passage questions.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Complete `prompt` and return the trimmed text.
    ///
    /// # Errors
    ///
    /// Returns `InferenceError` when the backend is unavailable or answers
    /// with nothing usable.
    async fn infer(&self, prompt: &str) -> Result<String, InferenceError>;
}

#[derive(Clone, Debug)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl InferenceConfig {
    /// `None` when the settings do not name a server.
    #[must_use]
    pub fn from_settings(settings: &InferenceSettings) -> Option<Self> {
        let base_url = settings.base_url()?.to_string();
        Some(Self {
            base_url,
            api_key: settings.api_key().map(str::to_string),
            model: settings.model().unwrap_or(DEFAULT_MODEL).to_string(),
        })
    }

    /// Read `G3_AI_BASE_URL`, `G3_AI_API_KEY` and `G3_AI_MODEL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let draft = InferenceSettingsDraft {
            base_url: env::var("G3_AI_BASE_URL").ok(),
            api_key: env::var("G3_AI_API_KEY").ok(),
            model: env::var("G3_AI_MODEL").ok(),
        };
        match draft.validate() {
            Ok(settings) => Self::from_settings(&settings),
            Err(err) => {
                warn!(error = %err, "ignoring G3_AI_BASE_URL");
                None
            }
        }
    }
}

/// OpenAI-compatible `chat/completions` client.
#[derive(Clone)]
pub struct HttpInferenceClient {
    client: Client,
    config: Option<InferenceConfig>,
}

impl HttpInferenceClient {
    #[must_use]
    pub fn new(config: Option<InferenceConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn infer(&self, prompt: &str) -> Result<String, InferenceError> {
        let config = self.config.as_ref().ok_or(InferenceError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.7,
        };

        let mut request = self.client.post(url).json(&payload);
        if let Some(key) = config.api_key.as_deref() {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(InferenceError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(InferenceError::EmptyResponse)?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
