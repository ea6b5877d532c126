//! Query core.
//!
//! Turns a [`Question`] into a prompt, sends it through a [`QueryPort`] and
//! returns the model's [`Verdict`]. Optional operations without a template
//! are answered by negating their complement:
//!
//! | Operation | Fallback |
//! |-----------|----------|
//! | `isOdd(n)` | `!isEven(n)` |
//! | `areNotEqual(a, b)` | `!areEqual(a, b)` |
//! | `isLessThan(a, b)` | `!isGreaterThan(b, a)` |
//!
//! An `Undefined` complement stays `Undefined`.

use crate::ports::query::{FnQuery, QueryError, QueryPort};
use is_even_ai_domain::{PromptTemplates, Question, TemplateError, Verdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by [`QueryCore`].
///
/// Every variant carries the question that failed. Messages name the
/// question only; the cause is reachable through `source()`.
#[derive(Error, Debug)]
pub enum QueryCoreError {
    #[error("failed to get prompt for {question}")]
    Template {
        question: Question,
        source: TemplateError,
    },

    #[error("query for {question} failed")]
    Query {
        question: Question,
        source: QueryError,
    },

    #[error("failed to determine {question} by inverting {complement}")]
    Fallback {
        question: Question,
        complement: Question,
        source: Box<QueryCoreError>,
    },
}

impl QueryCoreError {
    /// The question the caller asked
    pub fn question(&self) -> &Question {
        match self {
            QueryCoreError::Template { question, .. }
            | QueryCoreError::Query { question, .. }
            | QueryCoreError::Fallback { question, .. } => question,
        }
    }

    /// The template error at the root of this failure, if any
    pub fn template_error(&self) -> Option<&TemplateError> {
        match self {
            QueryCoreError::Template { source, .. } => Some(source),
            QueryCoreError::Query { .. } => None,
            QueryCoreError::Fallback { source, .. } => source.template_error(),
        }
    }

    /// The querying error at the root of this failure, if any
    pub fn query_error(&self) -> Option<&QueryError> {
        match self {
            QueryCoreError::Template { .. } => None,
            QueryCoreError::Query { source, .. } => Some(source),
            QueryCoreError::Fallback { source, .. } => source.query_error(),
        }
    }
}

/// Answers numeric questions by asking a model.
///
/// Holds one template set and one query port for its whole lifetime and keeps
/// no other state, so a single instance can be shared across tasks.
pub struct QueryCore {
    templates: PromptTemplates,
    query: Arc<dyn QueryPort>,
}

impl QueryCore {
    pub fn new(templates: PromptTemplates, query: Arc<dyn QueryPort>) -> Self {
        Self { templates, query }
    }

    /// Build a core around a synchronous closure
    pub fn from_fn<F>(templates: PromptTemplates, query: F) -> Self
    where
        F: Fn(&str) -> Result<Verdict, QueryError> + Send + Sync + 'static,
    {
        Self::new(templates, Arc::new(FnQuery::new(query)))
    }

    pub fn templates(&self) -> &PromptTemplates {
        &self.templates
    }

    pub async fn is_even(&self, n: i64) -> Result<Verdict, QueryCoreError> {
        self.ask(Question::is_even(n)).await
    }

    pub async fn is_odd(&self, n: i64) -> Result<Verdict, QueryCoreError> {
        self.ask(Question::is_odd(n)).await
    }

    pub async fn are_equal(&self, a: i64, b: i64) -> Result<Verdict, QueryCoreError> {
        self.ask(Question::are_equal(a, b)).await
    }

    pub async fn are_not_equal(&self, a: i64, b: i64) -> Result<Verdict, QueryCoreError> {
        self.ask(Question::are_not_equal(a, b)).await
    }

    pub async fn is_greater_than(&self, a: i64, b: i64) -> Result<Verdict, QueryCoreError> {
        self.ask(Question::is_greater_than(a, b)).await
    }

    pub async fn is_less_than(&self, a: i64, b: i64) -> Result<Verdict, QueryCoreError> {
        self.ask(Question::is_less_than(a, b)).await
    }

    /// Answer any question, falling back to its complement when the
    /// question's optional template is not defined.
    pub async fn ask(&self, question: Question) -> Result<Verdict, QueryCoreError> {
        if let Some(verdict) = self.ask_direct(&question).await? {
            return Ok(verdict);
        }

        let Some(complement) = question.complement() else {
            // Only optional templates produce no prompt, and those all have a complement.
            let name = question.name();
            return Err(QueryCoreError::Template {
                question,
                source: TemplateError::MandatoryMissing(name),
            });
        };

        debug!(
            question = %question,
            complement = %complement,
            "No template defined, deriving answer from complement"
        );

        match self.ask_direct(&complement).await {
            Ok(Some(verdict)) => Ok(verdict.negate()),
            Ok(None) => {
                let source = QueryCoreError::Template {
                    question: complement.clone(),
                    source: TemplateError::MandatoryMissing(complement.name()),
                };
                Err(QueryCoreError::Fallback {
                    question,
                    complement,
                    source: Box::new(source),
                })
            }
            Err(e) => Err(QueryCoreError::Fallback {
                question,
                complement,
                source: Box::new(e),
            }),
        }
    }

    /// Render the question's own prompt and query it.
    ///
    /// Returns `Ok(None)` when the question's optional template is absent.
    async fn ask_direct(&self, question: &Question) -> Result<Option<Verdict>, QueryCoreError> {
        let prompt = self
            .templates
            .render_question(question)
            .map_err(|source| QueryCoreError::Template {
                question: question.clone(),
                source,
            })?;

        let Some(prompt) = prompt else {
            return Ok(None);
        };

        debug!(question = %question, prompt = %prompt, "Dispatching prompt");

        let verdict = self
            .query
            .query(&prompt)
            .await
            .map_err(|source| QueryCoreError::Query {
                question: question.clone(),
                source,
            })?;

        debug!(question = %question, verdict = %verdict, "Received verdict");
        Ok(Some(verdict))
    }
}

impl std::fmt::Debug for QueryCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCore")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}
