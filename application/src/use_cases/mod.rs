//! Use cases
//!
//! - [`query_core`] - turns questions into prompts and answers into verdicts
//! - [`oracle_slot`] - lock-guarded holder of one configured [`QueryCore`](query_core::QueryCore)

pub mod oracle_slot;
pub mod query_core;
