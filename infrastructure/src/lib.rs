//! Infrastructure layer for is-even-ai
//!
//! This crate contains the adapters that implement the query port against
//! real model providers, configuration file loading and the process-wide
//! shared instance.

pub mod config;
pub mod global;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileProviderConfig};
pub use providers::{
    ProviderError, ProviderKind, ProviderSettings, build_query_core, gemini::GeminiQuery,
    openai::OpenAiQuery,
};
