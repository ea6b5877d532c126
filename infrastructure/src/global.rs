//! Process-wide shared instance.
//!
//! Configure once with an API key, then call the free functions from
//! anywhere in the process:
//!
//! ```no_run
//! # async fn run() -> Result<(), is_even_ai_application::SlotError> {
//! let key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
//! is_even_ai_infrastructure::global::set_api_key(&key)?;
//! let verdict = is_even_ai_infrastructure::global::is_even(4).await?;
//! println!("Is 4 even? {verdict}");
//! # Ok(())
//! # }
//! ```

use crate::providers::{ProviderKind, ProviderSettings, build_query_core};
use is_even_ai_application::{OracleSlot, SlotError};
use is_even_ai_domain::{Question, Verdict};

static INSTANCE: OracleSlot = OracleSlot::new();

/// Configure the shared instance for `provider`.
///
/// An empty `api_key` or a failing construction clears the instance.
pub fn configure(
    provider: ProviderKind,
    api_key: &str,
    settings: &ProviderSettings,
) -> Result<(), SlotError> {
    INSTANCE.configure(api_key, |key| build_query_core(provider, key, settings))
}

/// Configure the shared instance for Gemini with default settings
pub fn set_api_key(api_key: &str) -> Result<(), SlotError> {
    configure(ProviderKind::Gemini, api_key, &ProviderSettings::default())
}

pub fn clear() {
    INSTANCE.clear();
}

pub fn is_configured() -> bool {
    INSTANCE.is_configured()
}

/// Answer any question with the shared instance
pub async fn ask(question: Question) -> Result<Verdict, SlotError> {
    INSTANCE.ask(question).await
}

pub async fn is_even(n: i64) -> Result<Verdict, SlotError> {
    INSTANCE.is_even(n).await
}

pub async fn is_odd(n: i64) -> Result<Verdict, SlotError> {
    INSTANCE.is_odd(n).await
}

pub async fn are_equal(a: i64, b: i64) -> Result<Verdict, SlotError> {
    INSTANCE.are_equal(a, b).await
}

pub async fn are_not_equal(a: i64, b: i64) -> Result<Verdict, SlotError> {
    INSTANCE.are_not_equal(a, b).await
}

pub async fn is_greater_than(a: i64, b: i64) -> Result<Verdict, SlotError> {
    INSTANCE.is_greater_than(a, b).await
}

pub async fn is_less_than(a: i64, b: i64) -> Result<Verdict, SlotError> {
    INSTANCE.is_less_than(a, b).await
}
