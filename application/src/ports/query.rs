//! Query port
//!
//! Defines the interface for asking a model a single yes/no question.

use async_trait::async_trait;
use is_even_ai_domain::Verdict;
use thiserror::Error;

/// Mechanical failures while querying a model.
///
/// A reply that cannot be read as true or false is not an error; it is
/// reported as [`Verdict::Undefined`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Port for sending one prompt to a model
///
/// Implementations (adapters) live in the infrastructure layer. Each call is
/// a single attempt; retries are left to the caller.
#[async_trait]
pub trait QueryPort: Send + Sync {
    /// Send `prompt` and interpret the reply
    async fn query(&self, prompt: &str) -> Result<Verdict, QueryError>;
}

/// Adapts a plain closure into a [`QueryPort`].
pub struct FnQuery<F>(F);

impl<F> FnQuery<F>
where
    F: Fn(&str) -> Result<Verdict, QueryError> + Send + Sync,
{
    pub fn new(query: F) -> Self {
        Self(query)
    }
}

#[async_trait]
impl<F> QueryPort for FnQuery<F>
where
    F: Fn(&str) -> Result<Verdict, QueryError> + Send + Sync,
{
    async fn query(&self, prompt: &str) -> Result<Verdict, QueryError> {
        (self.0)(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fn_query_passes_prompt() {
        let port = FnQuery::new(|prompt: &str| Ok(Verdict::from(prompt == "Is 2 an even number?")));
        assert_eq!(port.query("Is 2 an even number?").await, Ok(Verdict::True));
        assert_eq!(port.query("Is 3 an even number?").await, Ok(Verdict::False));
    }

    #[test]
    fn test_status_error_display() {
        let error = QueryError::Status {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed with status 401: invalid key");
    }
}
