//! Chat-completion clients for the supported providers.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InferenceError;

const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_GROQ_MODEL: &str = "llama3-70b-8192";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo";
const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_MAX_TOKENS: u32 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The single capability the pipeline depends on.
#[allow(async_fn_in_trait)]
pub trait InferenceClient {
    /// Send one prompt, return the raw completion text.
    async fn invoke(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Which provider to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Groq,
    OpenAi,
}

/// Construction-time inference configuration.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub provider: Provider,
    pub api_key: String,
    /// Model override; each provider has a sensible default.
    pub model: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
}

impl InferenceConfig {
    #[must_use]
    pub fn new(provider: Provider, api_key: String) -> Self {
        Self {
            provider,
            api_key,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    fn model_for(&self, default: &str) -> String {
        self.model.clone().unwrap_or_else(|| default.to_string())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize, Default)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Shared OpenAI-compatible chat-completion transport.
#[derive(Debug, Clone)]
struct ChatCompletionClient {
    http: reqwest::Client,
    endpoint: &'static str,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatCompletionClient {
    fn new(config: &InferenceConfig, endpoint: &'static str, default_model: &str) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| InferenceError::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            model: config.model_for(default_model),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, InferenceError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending inference request");

        let response = self
            .http
            .post(self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(InferenceError::RateLimited);
        }
        if status.as_u16() == 401 {
            return Err(InferenceError::Unauthorized);
        }
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .map(|detail| detail.message)
                .unwrap_or_else(|| status.to_string());
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| InferenceError::InvalidResponse("no choices returned".to_string()))?;

        debug!(response_len = content.len(), "inference response received");
        Ok(content)
    }
}

/// Groq chat-completion client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    inner: ChatCompletionClient,
}

impl GroqClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, InferenceError> {
        Ok(Self {
            inner: ChatCompletionClient::new(config, GROQ_ENDPOINT, DEFAULT_GROQ_MODEL)?,
        })
    }
}

impl InferenceClient for GroqClient {
    async fn invoke(&self, prompt: &str) -> Result<String, InferenceError> {
        self.inner.complete(prompt).await
    }
}

/// OpenAI chat-completion client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    inner: ChatCompletionClient,
}

impl OpenAiClient {
    pub fn new(config: &InferenceConfig) -> Result<Self, InferenceError> {
        Ok(Self {
            inner: ChatCompletionClient::new(config, OPENAI_ENDPOINT, DEFAULT_OPENAI_MODEL)?,
        })
    }
}

impl InferenceClient for OpenAiClient {
    async fn invoke(&self, prompt: &str) -> Result<String, InferenceError> {
        self.inner.complete(prompt).await
    }
}

/// A provider chosen at construction time from configuration.
#[derive(Debug, Clone)]
pub enum ProviderClient {
    Groq(GroqClient),
    OpenAi(OpenAiClient),
}

impl ProviderClient {
    pub fn from_config(config: &InferenceConfig) -> Result<Self, InferenceError> {
        match config.provider {
            Provider::Groq => Ok(Self::Groq(GroqClient::new(config)?)),
            Provider::OpenAi => Ok(Self::OpenAi(OpenAiClient::new(config)?)),
        }
    }
}

impl InferenceClient for ProviderClient {
    async fn invoke(&self, prompt: &str) -> Result<String, InferenceError> {
        match self {
            Self::Groq(client) => client.invoke(prompt).await,
            Self::OpenAi(client) => client.invoke(prompt).await,
        }
    }
}
