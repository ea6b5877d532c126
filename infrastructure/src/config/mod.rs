//! Configuration file loading for is-even-ai
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IS_EVEN_AI_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./is-even-ai.toml` or `./.is-even-ai.toml`
//! 4. Global: `<config dir>/is-even-ai/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileProviderConfig};
pub use loader::{ConfigError, ConfigLoader};
