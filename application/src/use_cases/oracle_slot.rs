//! Shared instance slot.
//!
//! Holds at most one configured [`QueryCore`] behind a lock. The lock guards
//! only the state itself: operations clone the `Arc` under the lock and run
//! the query after releasing it, so a slow model call never blocks a
//! concurrent reconfiguration.
//!
//! ```text
//! Unconfigured --configure(ok)--> Configured
//! Configured --configure(empty | failed) / clear--> Unconfigured
//! ```

use super::query_core::{QueryCore, QueryCoreError};
use is_even_ai_domain::{Question, Verdict};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by [`OracleSlot`]
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("credential cannot be empty")]
    EmptyCredential,

    #[error("credential not set or instance not initialized; configure an API key first")]
    NotConfigured,

    #[error("failed to initialize shared instance")]
    Initialization(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Query(#[from] QueryCoreError),
}

impl SlotError {
    /// Check if this error was raised before any query was attempted
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, SlotError::Query(_))
    }
}

enum SlotState {
    Unconfigured,
    Configured(Arc<QueryCore>),
}

/// Lock-guarded holder of one configured [`QueryCore`].
pub struct OracleSlot {
    state: Mutex<SlotState>,
}

impl OracleSlot {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(SlotState::Unconfigured),
        }
    }

    /// Replace the held instance with one built from `credential`.
    ///
    /// An empty credential or a failing `build` leaves the slot unconfigured;
    /// the previously held instance is released in both cases. `build` runs
    /// outside the lock, so a panic in it leaves the slot untouched.
    pub fn configure<F, E>(&self, credential: &str, build: F) -> Result<(), SlotError>
    where
        F: FnOnce(&str) -> Result<QueryCore, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        if credential.is_empty() {
            self.clear();
            return Err(SlotError::EmptyCredential);
        }

        match build(credential) {
            Ok(core) => {
                let mut state = self.state.lock().unwrap();
                if matches!(*state, SlotState::Configured(_)) {
                    debug!("Replacing previously configured instance");
                }
                *state = SlotState::Configured(Arc::new(core));
                info!("Shared instance configured");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to build shared instance");
                self.clear();
                Err(SlotError::Initialization(Box::new(e)))
            }
        }
    }

    /// Release the held instance, if any
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        Self::release(&mut state);
    }

    pub fn is_configured(&self) -> bool {
        matches!(*self.state.lock().unwrap(), SlotState::Configured(_))
    }

    /// The currently held instance.
    ///
    /// The returned `Arc` stays valid even if the slot is reconfigured
    /// while it is in use.
    pub fn current(&self) -> Result<Arc<QueryCore>, SlotError> {
        match &*self.state.lock().unwrap() {
            SlotState::Configured(core) => Ok(Arc::clone(core)),
            SlotState::Unconfigured => Err(SlotError::NotConfigured),
        }
    }

    /// Answer any question with the held instance
    pub async fn ask(&self, question: Question) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.ask(question).await?)
    }

    pub async fn is_even(&self, n: i64) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.is_even(n).await?)
    }

    pub async fn is_odd(&self, n: i64) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.is_odd(n).await?)
    }

    pub async fn are_equal(&self, a: i64, b: i64) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.are_equal(a, b).await?)
    }

    pub async fn are_not_equal(&self, a: i64, b: i64) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.are_not_equal(a, b).await?)
    }

    pub async fn is_greater_than(&self, a: i64, b: i64) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.is_greater_than(a, b).await?)
    }

    pub async fn is_less_than(&self, a: i64, b: i64) -> Result<Verdict, SlotError> {
        let core = self.current()?;
        Ok(core.is_less_than(a, b).await?)
    }

    fn release(state: &mut SlotState) {
        if matches!(state, SlotState::Configured(_)) {
            info!("Releasing shared instance");
        }
        *state = SlotState::Unconfigured;
    }
}

impl Default for OracleSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::query::QueryError;
    use is_even_ai_domain::PromptTemplates;
    use std::convert::Infallible;
    use std::error::Error as _;
    use std::panic::AssertUnwindSafe;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, thiserror::Error)]
    #[error("bad endpoint")]
    struct BuildError;

    fn answering(verdict: Verdict) -> impl FnOnce(&str) -> Result<QueryCore, Infallible> {
        move |_key: &str| Ok(QueryCore::from_fn(PromptTemplates::standard(), move |_| Ok(verdict)))
    }

    #[tokio::test]
    async fn test_unconfigured_slot_rejects_every_operation() {
        let slot = OracleSlot::new();
        assert!(!slot.is_configured());
        assert!(matches!(slot.is_even(1).await, Err(SlotError::NotConfigured)));
        assert!(matches!(slot.is_odd(1).await, Err(SlotError::NotConfigured)));
        assert!(matches!(slot.are_equal(1, 2).await, Err(SlotError::NotConfigured)));
        assert!(matches!(slot.are_not_equal(1, 2).await, Err(SlotError::NotConfigured)));
        assert!(matches!(slot.is_greater_than(1, 2).await, Err(SlotError::NotConfigured)));
        assert!(matches!(slot.is_less_than(1, 2).await, Err(SlotError::NotConfigured)));
        assert!(matches!(
            slot.ask(Question::is_odd(3)).await,
            Err(SlotError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_configure_then_query() {
        let slot = OracleSlot::new();
        slot.configure("key", answering(Verdict::True)).unwrap();
        assert!(slot.is_configured());
        assert_eq!(slot.is_even(2).await.unwrap(), Verdict::True);
        assert_eq!(slot.is_less_than(1, 2).await.unwrap(), Verdict::True);
    }

    #[tokio::test]
    async fn test_build_receives_credential() {
        let slot = OracleSlot::new();
        slot.configure("secret", |key: &str| {
            assert_eq!(key, "secret");
            Ok::<_, Infallible>(QueryCore::from_fn(PromptTemplates::standard(), |_| {
                Ok(Verdict::False)
            }))
        })
        .unwrap();
        assert_eq!(slot.are_equal(1, 1).await.unwrap(), Verdict::False);
    }

    #[tokio::test]
    async fn test_empty_credential_clears_slot() {
        let slot = OracleSlot::new();
        slot.configure("key", answering(Verdict::True)).unwrap();

        let built = AtomicUsize::new(0);
        let err = slot
            .configure("", |_key: &str| {
                built.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>(QueryCore::from_fn(PromptTemplates::standard(), |_| {
                    Ok(Verdict::True)
                }))
            })
            .unwrap_err();

        assert!(matches!(err, SlotError::EmptyCredential));
        assert_eq!(err.to_string(), "credential cannot be empty");
        assert_eq!(built.load(Ordering::SeqCst), 0);
        assert!(!slot.is_configured());
        assert!(matches!(slot.is_even(2).await, Err(SlotError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_failed_build_clears_slot() {
        let slot = OracleSlot::new();
        slot.configure("key", answering(Verdict::True)).unwrap();

        let err = slot
            .configure("key", |_key: &str| Err::<QueryCore, _>(BuildError))
            .unwrap_err();

        assert!(matches!(err, SlotError::Initialization(_)));
        assert_eq!(err.to_string(), "failed to initialize shared instance");
        assert_eq!(err.source().unwrap().to_string(), "bad endpoint");
        assert!(err.is_configuration_error());
        assert!(!slot.is_configured());
    }

    #[tokio::test]
    async fn test_reconfigure_replaces_instance() {
        let slot = OracleSlot::new();
        slot.configure("first", answering(Verdict::True)).unwrap();
        let held = slot.current().unwrap();

        slot.configure("second", answering(Verdict::False)).unwrap();
        assert_eq!(slot.is_even(2).await.unwrap(), Verdict::False);

        // An instance captured before reconfiguration keeps working.
        assert_eq!(held.is_even(2).await.unwrap(), Verdict::True);
    }

    #[tokio::test]
    async fn test_clear() {
        let slot = OracleSlot::new();
        slot.configure("key", answering(Verdict::True)).unwrap();
        slot.clear();
        assert!(matches!(slot.current(), Err(SlotError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_query_errors_pass_through_unmodified() {
        let slot = OracleSlot::new();
        slot.configure("key", |_key: &str| {
            Ok::<_, Infallible>(QueryCore::from_fn(PromptTemplates::standard(), |_| {
                Err(QueryError::Status {
                    status: 500,
                    body: "boom".to_string(),
                })
            }))
        })
        .unwrap();

        let err = slot.is_greater_than(7, 3).await.unwrap_err();
        assert!(!err.is_configuration_error());
        let SlotError::Query(inner) = &err else {
            panic!("expected query error, got {err:?}");
        };
        assert_eq!(inner.to_string(), err.to_string());
        assert_eq!(err.to_string(), "query for isGreaterThan(7, 3) failed");
        assert_eq!(
            err.source().unwrap().to_string(),
            "Request failed with status 500: boom"
        );
    }

    #[tokio::test]
    async fn test_panicking_build_leaves_slot_usable() {
        let slot = OracleSlot::new();
        slot.configure("key", answering(Verdict::True)).unwrap();

        let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
            slot.configure("key", |_key: &str| -> Result<QueryCore, Infallible> {
                panic!("build failed")
            })
        }));
        assert!(outcome.is_err());

        assert!(slot.is_configured());
        assert_eq!(slot.is_even(2).await.unwrap(), Verdict::True);

        slot.clear();
        slot.configure("key", answering(Verdict::False)).unwrap();
        assert_eq!(slot.is_even(2).await.unwrap(), Verdict::False);
    }
}
