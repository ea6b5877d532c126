//! Prompt generation for numeric questions
//!
//! - [`name::PromptName`] - the six operation names and their arity
//! - [`template::PromptTemplates`] - the template set used to phrase questions

pub mod name;
pub mod template;

pub use name::PromptName;
pub use template::{BinaryTemplate, PromptTemplates, UnaryTemplate};

/// System instruction sent with every prompt, restricting replies to a single word.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI assistant designed to answer questions about numbers. You will only answer with only the word true or false.";
