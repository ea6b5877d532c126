//! Application layer for is-even-ai
//!
//! This crate contains the query core, the shared instance slot and the
//! port through which prompts reach a model. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::query::{FnQuery, QueryError, QueryPort};
pub use use_cases::oracle_slot::{OracleSlot, SlotError};
pub use use_cases::query_core::{QueryCore, QueryCoreError};
