//! Domain error types

use crate::prompt::PromptName;
use thiserror::Error;

/// Errors raised while resolving a prompt template.
///
/// All of these indicate misuse or misconfiguration, never a transient
/// condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown prompt name: {0}")]
    UnknownPrompt(String),

    #[error("{0} prompt template is mandatory and not defined")]
    MandatoryMissing(PromptName),

    #[error("not enough arguments for {name} prompt: expected {expected}, got {got}")]
    NotEnoughArguments {
        name: PromptName,
        expected: usize,
        got: usize,
    },
}

impl TemplateError {
    /// Check if this error is caused by a missing mandatory template
    pub fn is_mandatory_missing(&self) -> bool {
        matches!(self, TemplateError::MandatoryMissing(_))
    }
}
