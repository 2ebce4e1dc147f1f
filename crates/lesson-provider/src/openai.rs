//! OpenAI-compatible chat-completions provider.
//!
//! Works against any endpoint that speaks the `/chat/completions` wire
//! format (OpenAI, Azure-style gateways, Ollama, vLLM, ...).

use std::time::Duration;

use lesson_config::{OPENAI_COMPAT, ProviderConfig};
use lesson_core::RawContent;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::http::check_response;
use crate::prompt::GenerationRequest;
use crate::ContentProvider;

const SYSTEM_PROMPT: &str =
    "You generate structured lesson content. Reply with a single JSON document and nothing else.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for one chat-completions endpoint and model.
pub struct OpenAiCompatProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    json_mode: bool,
}

impl OpenAiCompatProvider {
    /// Build a provider from the `[provider]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] when no key is configured, or
    /// [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey {
                provider: OPENAI_COMPAT.to_string(),
            });
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("lesson/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            json_mode: config.json_mode,
        })
    }

    /// The full chat-completions URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn body<'a>(&'a self, request: &'a GenerationRequest) -> ChatRequest<'a> {
        let response_format = (self.json_mode && request.json_object).then_some(ResponseFormat {
            kind: "json_object",
        });
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            response_format,
        }
    }
}

/// Pull the first choice's text out of a checked response.
async fn read_content(resp: reqwest::Response) -> Result<RawContent, ProviderError> {
    let data: ChatResponse = resp
        .json()
        .await
        .map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.trim().is_empty());

    match content {
        Some(text) => {
            tracing::debug!(
                served_by = data.model.as_deref().unwrap_or("unknown"),
                chars = text.len(),
                "chat completion received"
            );
            Ok(RawContent::Text(text))
        }
        None => Err(ProviderError::EmptyResponse {
            provider: OPENAI_COMPAT.to_string(),
        }),
    }
}

impl ContentProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        OPENAI_COMPAT
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<RawContent, ProviderError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_type = request.prompt_type(),
            "requesting chat completion"
        );
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.body(request))
            .send()
            .await?;
        read_content(check_response(resp).await?).await
    }
}
