use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::core::config::{AiProvider, AiSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChatMessage {
    pub(crate) role: ChatRole,
    pub(crate) content: String,
}

impl ChatMessage {
    pub(crate) fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub(crate) fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChatRequest {
    pub(crate) messages: Vec<ChatMessage>,
    pub(crate) temperature: f32,
}

#[derive(Debug, Error)]
pub(crate) enum ModelError {
    #[error("model client is not configured: missing {0}")]
    NotConfigured(String),
    #[error("failed to reach model endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// A chat-completion backend. Returns the assistant message text; an absent
/// message yields an empty string.
#[async_trait]
pub(crate) trait ModelClient: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError>;
}

/// Chat-completions client for OpenAI-compatible endpoints and Azure OpenAI deployments.
#[derive(Debug, Clone)]
pub(crate) struct OpenAiModelClient {
    client: Client,
    settings: AiSettings,
}

struct Target {
    url: String,
    auth: Auth,
    model: Option<String>,
}

enum Auth {
    Bearer(String),
    ApiKeyHeader(String),
}

impl OpenAiModelClient {
    pub(crate) fn from_settings(settings: &AiSettings) -> Result<Self, ModelError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(settings.ai_request_timeout))
            .build()?;

        Ok(Self { client, settings: settings.clone() })
    }

    fn target(&self) -> Result<Target, ModelError> {
        match self.settings.provider {
            AiProvider::OpenAi => {
                let mut missing = Vec::new();
                if self.settings.openai_api_key.trim().is_empty() {
                    missing.push("OPENAI_API_KEY");
                }
                if self.settings.openai_base_url.trim().is_empty() {
                    missing.push("OPENAI_BASE_URL");
                }
                if !missing.is_empty() {
                    return Err(ModelError::NotConfigured(missing.join(", ")));
                }

                Ok(Target {
                    url: format!(
                        "{}/chat/completions",
                        self.settings.openai_base_url.trim_end_matches('/')
                    ),
                    auth: Auth::Bearer(self.settings.openai_api_key.clone()),
                    model: Some(self.settings.ai_model.clone()),
                })
            }
            AiProvider::Azure => {
                let azure = &self.settings.azure;
                let missing = azure.missing_fields();
                if !missing.is_empty() {
                    return Err(ModelError::NotConfigured(missing.join(", ")));
                }

                Ok(Target {
                    url: format!(
                        "{}/openai/deployments/{}/chat/completions?api-version={}",
                        azure.endpoint.trim_end_matches('/'),
                        azure.deployment,
                        azure.api_version
                    ),
                    auth: Auth::ApiKeyHeader(azure.api_key.clone()),
                    model: None,
                })
            }
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError> {
        let target = self.target()?;

        let mut payload = json!({
            "messages": request.messages,
            "temperature": request.temperature,
        });
        if let Some(model) = &target.model {
            payload["model"] = Value::String(model.clone());
        }

        let builder = self.client.post(&target.url).json(&payload);
        let builder = match &target.auth {
            Auth::Bearer(token) => builder.bearer_auth(token),
            Auth::ApiKeyHeader(key) => builder.header("api-key", key),
        };

        let timer = Instant::now();
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                elapsed_ms = timer.elapsed().as_millis() as u64,
                "Model endpoint returned an error"
            );
            return Err(ModelError::Status { status: status.as_u16(), body });
        }

        let body: Value = response.json().await?;
        let tokens_used = body
            .get("usage")
            .and_then(|usage| usage.get("total_tokens"))
            .and_then(Value::as_u64);

        tracing::info!(
            elapsed_ms = timer.elapsed().as_millis() as u64,
            tokens_used,
            "Model completion received"
        );

        Ok(extract_content(&body))
    }
}

/// `choices[0].message.content`, or an empty string when any step is missing.
pub(crate) fn extract_content(body: &Value) -> String {
    body.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
