//! Domain layer for is-even-ai
//!
//! This crate contains the value objects shared by every other layer.
//! It has no dependencies on transport, configuration or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Verdict
//!
//! The tri-state answer of a model: `True`, `False` or `Undefined` when the
//! reply could not be read as either.
//!
//! ## Question
//!
//! A numeric relation to ask about (`isEven(4)`, `isLessThan(3, 5)`), together
//! with the complement it can be derived from when no dedicated prompt exists.
//!
//! ## Prompt Templates
//!
//! The six named templates that turn a question into natural language.
//! `isEven`, `areEqual` and `isGreaterThan` are mandatory; the rest are optional.

pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use core::{
    error::TemplateError,
    question::Question,
    verdict::{Verdict, parse_verdict},
};
pub use prompt::{
    BinaryTemplate, PromptName, PromptTemplates, SYSTEM_INSTRUCTION, UnaryTemplate,
};
