//! The order status reconciliation pass.
//!
//! One invocation sweeps every tracked order (optionally scoped to one
//! owner company), resolves each against the external inventory, and:
//!
//! - skips the order untouched when the lookup failed,
//! - bumps `last_checked_at` when nothing changed or nothing matched,
//! - otherwise commits the transition + audit row in one transaction and
//!   then, strictly after commit, emails the owner best-effort.
//!
//! Orders are processed sequentially and independently: a failure on one
//! order is logged and never aborts the rest of the pass. Re-running the
//! pass with unchanged external data produces no new history rows.

use std::sync::Arc;

use ordertrack_core::OrderStatus;
use ordertrack_db::models::order::OrderWithOwner;
use ordertrack_db::repositories::OrderRepo;
use ordertrack_db::DbPool;
use ordertrack_inventory::{InventoryApi, InventoryRecord};
use ordertrack_notify::{templates, Mailer};
use serde::Serialize;

use crate::error::EngineError;
use crate::resolver::{resolve_order, LookupResolution};

/// What a reconciliation pass did, for logs and the run-now response.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReconcileSummary {
    /// Orders examined.
    pub checked: usize,
    /// Transitions committed.
    pub transitions: usize,
    /// Orders skipped because of a lookup or write failure.
    pub skipped: usize,
    /// Status-change emails accepted by the SMTP server.
    pub emails_sent: usize,
}

/// What to do with one order, given its stored status and the lookup
/// outcome.
#[derive(Debug, PartialEq)]
pub enum ReconcileAction {
    /// Lookup failed: leave every field untouched.
    Skip,
    /// No match, or the resolved status equals the stored one: bump
    /// `last_checked_at` only.
    TouchOnly,
    /// The resolved status differs: commit the transition.
    Transition {
        old: OrderStatus,
        new: OrderStatus,
    },
}

/// Pure transition decision. Backward transitions (e.g. received back to
/// shipped when the external record reverts to a transit status) are
/// deliberately allowed.
pub fn decide(stored: OrderStatus, resolution: &LookupResolution) -> ReconcileAction {
    match resolution {
        LookupResolution::Failed(_) => ReconcileAction::Skip,
        LookupResolution::NotFound => ReconcileAction::TouchOnly,
        LookupResolution::Resolved { status, .. } if *status == stored => {
            ReconcileAction::TouchOnly
        }
        LookupResolution::Resolved { status, .. } => ReconcileAction::Transition {
            old: stored,
            new: *status,
        },
    }
}

/// Labelled metadata from a matched inventory record, for the notification
/// email. Absent fields are omitted.
pub fn record_details(record: &InventoryRecord) -> Vec<(&'static str, String)> {
    let mut details = Vec::new();
    let mut push = |label, value: &Option<String>| {
        if let Some(v) = value {
            details.push((label, v.clone()));
        }
    };
    push("Record Type", &Some(record.source.as_str().to_string()));
    push("Client Name (from inventory)", &record.client_name);
    push("PO Number (from inventory)", &record.client_po_number);
    push("Location", &record.location);
    push("Supplier", &record.supplier);
    push("Quantity", &record.quantity);
    push("Description", &record.description);
    push("Last Updated", &record.updated_at);
    details
}

/// Runs reconciliation passes over the tracked orders.
pub struct ReconcileEngine {
    pool: DbPool,
    inventory: Arc<InventoryApi>,
    /// `None` when SMTP is not configured; transitions still commit,
    /// notifications are skipped.
    mailer: Option<Arc<Mailer>>,
}

impl ReconcileEngine {
    pub fn new(pool: DbPool, inventory: Arc<InventoryApi>, mailer: Option<Arc<Mailer>>) -> Self {
        Self {
            pool,
            inventory,
            mailer,
        }
    }

    /// Run one reconciliation pass.
    ///
    /// `owner_company` restricts the pass to orders whose owner's company
    /// name equals the filter. An error loading the order list aborts the
    /// pass; everything after that is isolated per order.
    pub async fn run(&self, owner_company: Option<&str>) -> Result<ReconcileSummary, EngineError> {
        let orders = OrderRepo::list_for_reconciliation(&self.pool, owner_company).await?;
        tracing::info!(
            count = orders.len(),
            scope = owner_company.unwrap_or("<all>"),
            "Reconciliation pass started"
        );

        let mut summary = ReconcileSummary {
            checked: orders.len(),
            ..Default::default()
        };

        for order in &orders {
            match self.reconcile_order(order).await {
                Ok(OrderOutcome::Unchanged) => {}
                Ok(OrderOutcome::Skipped) => summary.skipped += 1,
                Ok(OrderOutcome::Transitioned { email_sent }) => {
                    summary.transitions += 1;
                    if email_sent {
                        summary.emails_sent += 1;
                    }
                }
                Err(e) => {
                    tracing::error!(
                        order_id = order.id,
                        po_number = %order.po_number,
                        error = %e,
                        "Order reconciliation failed, continuing with next order"
                    );
                    summary.skipped += 1;
                }
            }
        }

        tracing::info!(
            checked = summary.checked,
            transitions = summary.transitions,
            skipped = summary.skipped,
            emails_sent = summary.emails_sent,
            "Reconciliation pass completed"
        );
        Ok(summary)
    }

    /// Reconcile a single order.
    async fn reconcile_order(
        &self,
        order: &OrderWithOwner,
    ) -> Result<OrderOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let stored = order.status()?;
        let resolution =
            resolve_order(&self.inventory, &order.po_number, order.client_name.as_deref()).await;

        match decide(stored, &resolution) {
            ReconcileAction::Skip => {
                if let LookupResolution::Failed(e) = &resolution {
                    tracing::warn!(
                        order_id = order.id,
                        po_number = %order.po_number,
                        error = %e,
                        "Inventory lookup failed, order left untouched"
                    );
                }
                Ok(OrderOutcome::Skipped)
            }
            ReconcileAction::TouchOnly => {
                OrderRepo::touch_checked(&self.pool, order.id).await?;
                Ok(OrderOutcome::Unchanged)
            }
            ReconcileAction::Transition { old, new } => {
                // Commit first; the notification below must not be able to
                // roll this back.
                OrderRepo::apply_transition(&self.pool, order.id, old, new).await?;
                tracing::info!(
                    order_id = order.id,
                    po_number = %order.po_number,
                    old_status = %old,
                    new_status = %new,
                    "Order status transition committed"
                );

                let record = match &resolution {
                    LookupResolution::Resolved { record, .. } => record,
                    _ => unreachable!("Transition implies Resolved"),
                };
                let email_sent = self.notify_owner(order, new, record).await;
                Ok(OrderOutcome::Transitioned { email_sent })
            }
        }
    }

    /// Best-effort status-change email to the order's owner. Failures are
    /// logged and never propagated.
    async fn notify_owner(
        &self,
        order: &OrderWithOwner,
        new_status: OrderStatus,
        record: &InventoryRecord,
    ) -> bool {
        let (Some(mailer), Some(owner_email)) = (&self.mailer, &order.owner_email) else {
            return false;
        };

        let subject = templates::status_change_subject(&order.po_number);
        let body = templates::status_change_body(
            &order.po_number,
            order.client_name.as_deref(),
            new_status,
            order.date_required,
            &record_details(record),
        );
        mailer.send(owner_email, &subject, &body).await.is_sent()
    }
}

enum OrderOutcome {
    Unchanged,
    Skipped,
    Transitioned { email_sent: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordertrack_inventory::{InventoryError, RecordSource};

    fn resolved(status: OrderStatus) -> LookupResolution {
        LookupResolution::Resolved {
            status,
            record: InventoryRecord {
                source: RecordSource::Shipment,
                external_id: Some("1".into()),
                client_name: Some("Acme Corp".into()),
                client_po_number: Some("PO-1".into()),
                status: Some("in_transit".into()),
                location: Some("Dock 4".into()),
                supplier: None,
                quantity: Some("12".into()),
                description: None,
                updated_at: None,
            },
        }
    }

    #[test]
    fn lookup_failure_skips_without_touching() {
        let failed = LookupResolution::Failed(InventoryError::ApiError {
            status: 503,
            body: "unavailable".into(),
        });
        assert_eq!(decide(OrderStatus::Pending, &failed), ReconcileAction::Skip);
        assert_eq!(decide(OrderStatus::Received, &failed), ReconcileAction::Skip);
    }

    #[test]
    fn not_found_only_touches_last_checked() {
        assert_eq!(
            decide(OrderStatus::Pending, &LookupResolution::NotFound),
            ReconcileAction::TouchOnly
        );
    }

    #[test]
    fn unchanged_status_only_touches_last_checked() {
        assert_eq!(
            decide(OrderStatus::Shipped, &resolved(OrderStatus::Shipped)),
            ReconcileAction::TouchOnly
        );
    }

    #[test]
    fn changed_status_transitions() {
        assert_eq!(
            decide(OrderStatus::Pending, &resolved(OrderStatus::Shipped)),
            ReconcileAction::Transition {
                old: OrderStatus::Pending,
                new: OrderStatus::Shipped,
            }
        );
    }

    #[test]
    fn backward_transition_is_allowed() {
        // The external record reverted to a transit status after the order
        // was marked received; transitions are not monotonic.
        assert_eq!(
            decide(OrderStatus::Received, &resolved(OrderStatus::Shipped)),
            ReconcileAction::Transition {
                old: OrderStatus::Received,
                new: OrderStatus::Shipped,
            }
        );
    }

    #[test]
    fn record_details_keeps_only_present_fields() {
        let LookupResolution::Resolved { record, .. } = resolved(OrderStatus::Shipped) else {
            unreachable!()
        };
        let details = record_details(&record);
        let labels: Vec<&str> = details.iter().map(|(l, _)| *l).collect();
        assert!(labels.contains(&"Location"));
        assert!(labels.contains(&"Quantity"));
        assert!(!labels.contains(&"Supplier"));
        assert!(!labels.contains(&"Description"));
        assert_eq!(details[0], ("Record Type", "shipment".to_string()));
    }
}
