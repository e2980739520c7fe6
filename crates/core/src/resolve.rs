//! Mapping from raw external inventory statuses to portal statuses.
//!
//! The external system's status vocabulary is unspecified and may grow over
//! time, so the mapping deliberately collapses to two outcomes: a record in
//! one of the transit statuses means the goods are on the move (`shipped`);
//! a record in any other status means the operator's facility has physical
//! custody, which is the portal's definition of `received` — not final
//! delivery to the client.

use crate::status::OrderStatus;

/// Raw statuses that indicate the goods are in transit.
const TRANSIT_STATUSES: [&str; 3] = ["shipped", "in_transit", "out_for_delivery"];

/// Collapse a raw external status string into a portal status.
///
/// Unknown and future status values intentionally resolve to
/// [`OrderStatus::Received`].
pub fn resolve_raw_status(raw: &str) -> OrderStatus {
    if TRANSIT_STATUSES.contains(&raw) {
        OrderStatus::Shipped
    } else {
        OrderStatus::Received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transit_statuses_resolve_to_shipped() {
        assert_eq!(resolve_raw_status("shipped"), OrderStatus::Shipped);
        assert_eq!(resolve_raw_status("in_transit"), OrderStatus::Shipped);
        assert_eq!(resolve_raw_status("out_for_delivery"), OrderStatus::Shipped);
    }

    #[test]
    fn stored_statuses_resolve_to_received() {
        for raw in ["processing", "stored", "received", "pending", "preparing", "awaiting", "delivered", "completed"] {
            assert_eq!(resolve_raw_status(raw), OrderStatus::Received, "raw = {raw}");
        }
    }

    #[test]
    fn unknown_status_resolves_to_received() {
        assert_eq!(resolve_raw_status("xyz123"), OrderStatus::Received);
        assert_eq!(resolve_raw_status(""), OrderStatus::Received);
    }

    #[test]
    fn matching_is_case_sensitive_on_raw_values() {
        // The external system serves lowercase statuses; anything else falls
        // into the custody bucket like other unknown values.
        assert_eq!(resolve_raw_status("Shipped"), OrderStatus::Received);
    }
}
