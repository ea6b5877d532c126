//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! provider = "openai"
//!
//! [openai]
//! model = "gpt-4o-mini"
//! timeout_secs = 10
//!
//! [gemini]
//! api_key_env = "MY_GEMINI_KEY"
//! ```

use crate::providers::{ProviderKind, ProviderSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("[{0}] timeout_secs cannot be 0")]
    InvalidTimeout(ProviderKind),

    #[error("[{0}] model name cannot be empty")]
    EmptyModelName(ProviderKind),

    #[error("[{0}] temperature must be between 0 and 2, got {1}")]
    InvalidTemperature(ProviderKind, f32),
}

/// Raw provider section (`[gemini]` or `[openai]`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key (default: provider convention).
    pub api_key_env: Option<String>,
    /// Direct API key; prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Alternate API endpoint.
    pub base_url: Option<String>,
    /// Model name (default: provider's lightweight model).
    pub model: Option<String>,
    /// Sampling temperature (default: 0).
    pub temperature: Option<f32>,
    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: Option<u64>,
}

impl FileProviderConfig {
    /// Convert into adapter settings
    pub fn to_settings(&self) -> ProviderSettings {
        ProviderSettings {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    fn validate(&self, kind: ProviderKind) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        if self.timeout_secs == Some(0) {
            errors.push(ConfigValidationError::InvalidTimeout(kind));
        }
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            errors.push(ConfigValidationError::EmptyModelName(kind));
        }
        if let Some(t) = self.temperature
            && !(0.0..=2.0).contains(&t)
        {
            errors.push(ConfigValidationError::InvalidTemperature(kind, t));
        }
        errors
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider used by the CLI and the global instance
    pub provider: ProviderKind,
    pub gemini: FileProviderConfig,
    pub openai: FileProviderConfig,
}

impl FileConfig {
    pub fn section(&self, kind: ProviderKind) -> &FileProviderConfig {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::OpenAi => &self.openai,
        }
    }

    pub fn section_mut(&mut self, kind: ProviderKind) -> &mut FileProviderConfig {
        match kind {
            ProviderKind::Gemini => &mut self.gemini,
            ProviderKind::OpenAi => &mut self.openai,
        }
    }

    pub fn provider_settings(&self, kind: ProviderKind) -> ProviderSettings {
        self.section(kind).to_settings()
    }

    /// Name of the environment variable holding the key for `kind`
    pub fn api_key_env(&self, kind: ProviderKind) -> &str {
        self.section(kind)
            .api_key_env
            .as_deref()
            .unwrap_or(kind.api_key_env())
    }

    /// Resolve the API key for `kind` from the process environment.
    pub fn api_key(&self, kind: ProviderKind) -> Option<String> {
        self.api_key_with(kind, |name| std::env::var(name).ok())
    }

    /// Resolve the API key for `kind`: a direct `api_key` wins, otherwise
    /// `lookup` is asked for the configured environment variable.
    pub fn api_key_with(
        &self,
        kind: ProviderKind,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        self.section(kind)
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| lookup(self.api_key_env(kind)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = self.gemini.validate(ProviderKind::Gemini);
        errors.extend(self.openai.validate(ProviderKind::OpenAi));
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
