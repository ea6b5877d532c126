//! Gemini generative-content adapter
//!
//! Sends each prompt as a single-turn `generateContent` request with the
//! fixed system instruction.

use super::{
    ProviderError, ProviderKind, ProviderSettings, endpoint, http_client, read_body,
    transport_error,
};
use async_trait::async_trait;
use is_even_ai_application::{QueryError, QueryPort};
use is_even_ai_domain::{SYSTEM_INSTRUCTION, Verdict, parse_verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

pub struct GeminiQuery {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    endpoint: String,
}

impl GeminiQuery {
    pub fn new(api_key: &str, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::MissingApiKey(ProviderKind::Gemini));
        }

        let model = settings
            .model
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let endpoint = endpoint(base_url, &format!("/v1beta/models/{}:generateContent", model))?;

        Ok(Self {
            client: http_client(settings.timeout_or_default())?,
            api_key: api_key.to_string(),
            model,
            temperature: settings.temperature_or_default(),
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

#[async_trait]
impl QueryPort for GeminiQuery {
    async fn query(&self, prompt: &str) -> Result<Verdict, QueryError> {
        debug!(model = %self.model, "Calling Gemini generateContent");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_body(response).await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| QueryError::MalformedResponse(format!("Gemini response: {}", e)))?;

        interpret(parsed)
    }
}

/// Map a decoded response to a verdict.
///
/// Blocked or empty responses are `Undefined`; a first part without text is
/// treated as a malformed response.
fn interpret(response: GenerateContentResponse) -> Result<Verdict, QueryError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        warn!(reason, "Gemini blocked the prompt");
        return Ok(Verdict::Undefined);
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        debug!("Gemini returned no candidates");
        return Ok(Verdict::Undefined);
    };

    let Some(part) = candidate.content.and_then(|c| c.parts.into_iter().next()) else {
        debug!(finish_reason = ?candidate.finish_reason, "Gemini candidate has no content");
        return Ok(Verdict::Undefined);
    };

    match part.text {
        Some(text) => Ok(parse_verdict(&text)),
        None => Err(QueryError::MalformedResponse(
            "Gemini response part has no text".to_string(),
        )),
    }
}

// -- Wire types ---------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
