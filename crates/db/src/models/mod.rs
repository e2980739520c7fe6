//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for writes where the entity is caller-mutable

pub mod alert_recipient;
pub mod order;
pub mod setting;
pub mod status_history;
pub mod user;
