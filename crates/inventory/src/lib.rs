//! Read-only client for the external inventory system.
//!
//! The external API serves two collections (`/shipments` and `/inbound`)
//! with a loosely structured, possibly evolving schema. Payloads are read
//! defensively at the boundary and converted into the strongly typed
//! [`record::InventoryRecord`]; the raw shape never escapes this crate.

pub mod api;
pub mod record;

pub use api::{InventoryApi, InventoryConfig, InventoryError};
pub use record::{InventoryRecord, RecordSource};
