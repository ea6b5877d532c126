//! OpenAI chat-completion adapter

use super::{
    ProviderError, ProviderKind, ProviderSettings, endpoint, http_client, read_body,
    transport_error,
};
use async_trait::async_trait;
use is_even_ai_application::{QueryError, QueryPort};
use is_even_ai_domain::{SYSTEM_INSTRUCTION, Verdict, parse_verdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub struct OpenAiQuery {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    endpoint: String,
}

impl OpenAiQuery {
    pub fn new(api_key: &str, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::MissingApiKey(ProviderKind::OpenAi));
        }

        let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

        Ok(Self {
            client: http_client(settings.timeout_or_default())?,
            api_key: api_key.to_string(),
            model: settings
                .model
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: settings.temperature_or_default(),
            endpoint: endpoint(base_url, "/v1/chat/completions")?,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        }
    }
}

#[async_trait]
impl QueryPort for OpenAiQuery {
    async fn query(&self, prompt: &str) -> Result<Verdict, QueryError> {
        debug!(model = %self.model, "Calling OpenAI chat completions");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_body(response).await?;
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| QueryError::MalformedResponse(format!("OpenAI response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        if content.is_empty() {
            debug!("OpenAI returned no content");
        }
        Ok(parse_verdict(&content))
    }
}

// -- Wire types ---------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
