//! Domain logic for the ordertrack platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! persistence layer, the reconciliation engine, and any future CLI tooling
//! without pulling in sqlx or HTTP machinery.

pub mod alerts;
pub mod error;
pub mod matching;
pub mod resolve;
pub mod schedule;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use status::OrderStatus;
