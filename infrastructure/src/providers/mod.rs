pub mod gemini;
pub mod openai;

use is_even_ai_application::{QueryCore, QueryError};
use is_even_ai_domain::PromptTemplates;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default deadline for a single provider request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default sampling temperature; zero keeps answers deterministic
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Provider to ask; parsed case-insensitively from the CLI, files and env.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Environment variable conventionally holding the API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(format!("unknown provider: {} (expected gemini or openai)", other)),
        }
    }
}

impl<'de> Deserialize<'de> for ProviderKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse::<ProviderKind>().map_err(serde::de::Error::custom)
    }
}

/// Optional overrides for a provider adapter.
///
/// Unset fields fall back to the provider's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSettings {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub timeout: Option<Duration>,
}

impl ProviderSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn temperature_or_default(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    fn timeout_or_default(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Errors raised while constructing a provider adapter
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} API key is required")]
    MissingApiKey(ProviderKind),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

/// Build a query core for `kind` using the standard prompt templates.
pub fn build_query_core(
    kind: ProviderKind,
    api_key: &str,
    settings: &ProviderSettings,
) -> Result<QueryCore, ProviderError> {
    let templates = PromptTemplates::standard();
    let core = match kind {
        ProviderKind::Gemini => {
            QueryCore::new(templates, Arc::new(gemini::GeminiQuery::new(api_key, settings)?))
        }
        ProviderKind::OpenAi => {
            QueryCore::new(templates, Arc::new(openai::OpenAiQuery::new(api_key, settings)?))
        }
    };
    Ok(core)
}

/// Build the HTTP client shared by all requests of one adapter.
///
/// The timeout bounds each request on its own.
fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Join `base` (validated, trailing slashes trimmed) with `path`.
fn endpoint(base: &str, path: &str) -> Result<String, ProviderError> {
    reqwest::Url::parse(base).map_err(|e| ProviderError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;
    Ok(format!("{}{}", base.trim_end_matches('/'), path))
}

fn transport_error(error: reqwest::Error) -> QueryError {
    if error.is_timeout() {
        QueryError::Timeout
    } else {
        QueryError::Transport(error.to_string())
    }
}

/// Read a response body, turning non-success statuses into errors.
async fn read_body(response: reqwest::Response) -> Result<String, QueryError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(QueryError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert!("bedrock".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_deserialize_ignores_case() {
        for name in ["\"openai\"", "\"OpenAI\"", "\"OPENAI\""] {
            let kind: ProviderKind = serde_json::from_str(name).unwrap();
            assert_eq!(kind, ProviderKind::OpenAi);
        }
        let err = serde_json::from_str::<ProviderKind>("\"bedrock\"").unwrap_err();
        assert!(err.to_string().contains("unknown provider: bedrock"));
        assert_eq!(serde_json::to_string(&ProviderKind::OpenAi).unwrap(), "\"openai\"");
    }

    #[test]
    fn test_api_key_env_names() {
        assert_eq!(ProviderKind::Gemini.api_key_env(), "GEMINI_API_KEY");
        assert_eq!(ProviderKind::OpenAi.api_key_env(), "OPENAI_API_KEY");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            endpoint("http://localhost:8080/", "/v1/chat/completions").unwrap(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_rejects_invalid_url() {
        let err = endpoint("not a url", "/v1").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.temperature_or_default(), 0.0);
        assert_eq!(settings.timeout_or_default(), Duration::from_secs(30));

        let settings = settings.with_temperature(0.7).with_timeout(Duration::from_secs(5));
        assert_eq!(settings.temperature_or_default(), 0.7);
        assert_eq!(settings.timeout_or_default(), Duration::from_secs(5));
    }

    #[test]
    fn test_build_query_core_requires_key() {
        for kind in [ProviderKind::Gemini, ProviderKind::OpenAi] {
            let err = build_query_core(kind, "", &ProviderSettings::default()).unwrap_err();
            assert!(matches!(err, ProviderError::MissingApiKey(k) if k == kind));
        }
    }

    #[test]
    fn test_build_query_core_uses_standard_templates() {
        let core =
            build_query_core(ProviderKind::OpenAi, "sk-test", &ProviderSettings::default()).unwrap();
        assert_eq!(
            core.templates()
                .render_named("isLessThan", &[1, 2])
                .unwrap()
                .as_deref(),
            Some("Is 1 less than 2?")
        );
    }
}
