//! Status resolution for a single tracked order.
//!
//! Asks the inventory client for the order's external record and collapses
//! the answer into one of three outcomes. The three cases are deliberately
//! distinct: a lookup failure must never be treated as "not found", or a
//! transient outage would silently mask an order's state.

use ordertrack_core::resolve::resolve_raw_status;
use ordertrack_core::OrderStatus;
use ordertrack_inventory::{InventoryApi, InventoryError, InventoryRecord};

/// Outcome of resolving one order against the external inventory.
#[derive(Debug)]
pub enum LookupResolution {
    /// A record matched; `status` is the collapsed portal status.
    Resolved {
        status: OrderStatus,
        record: InventoryRecord,
    },
    /// Both collections were queried successfully with no match. A
    /// legitimate steady state, not an error.
    NotFound,
    /// The external system could not be queried. The caller skips the
    /// order without touching any of its fields.
    Failed(InventoryError),
}

/// Resolve one order's portal status from the external inventory.
///
/// A matched record with a missing status field resolves to `received`
/// like any other non-transit value: presence in the external system means
/// the operator has custody.
pub async fn resolve_order(
    api: &InventoryApi,
    po_number: &str,
    client_hint: Option<&str>,
) -> LookupResolution {
    match api.find_record(po_number, client_hint).await {
        Ok(Some(record)) => {
            let status = resolve_raw_status(record.status.as_deref().unwrap_or(""));
            LookupResolution::Resolved { status, record }
        }
        Ok(None) => LookupResolution::NotFound,
        Err(e) => LookupResolution::Failed(e),
    }
}
