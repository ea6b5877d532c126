//! Port definitions (interfaces implemented by adapters)

pub mod query;
