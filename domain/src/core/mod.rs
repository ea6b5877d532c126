//! Core domain concepts shared across all layers.
//!
//! - [`verdict::Verdict`] - the tri-state answer of a model
//! - [`question::Question`] - an operation plus its integer operands
//! - [`error::TemplateError`] - prompt template resolution errors

pub mod error;
pub mod question;
pub mod verdict;
