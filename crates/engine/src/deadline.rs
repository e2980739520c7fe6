//! The deadline alert sweep.
//!
//! Finds orders that have not been received and are due within the
//! configured threshold, then sends one alert per owner and one
//! consolidated summary per active admin recipient. A failed send to one
//! address never blocks the others; an error reading settings or orders
//! aborts the whole sweep.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use ordertrack_db::models::order::OrderWithOwner;
use ordertrack_db::repositories::{AlertRecipientRepo, OrderRepo, SettingRepo};
use ordertrack_db::DbPool;
use ordertrack_notify::templates::{self, AtRiskOrder};
use ordertrack_notify::Mailer;
use serde::Serialize;

use crate::error::EngineError;

/// What an alert sweep did, for logs and the run-now response.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AlertSummary {
    /// At-risk orders found in the window.
    pub at_risk: usize,
    /// Owner alert emails accepted by the SMTP server.
    pub owner_emails_sent: usize,
    /// Admin summary emails accepted by the SMTP server.
    pub admin_emails_sent: usize,
}

/// Convert sweep rows into alert lines annotated with days remaining.
///
/// Rows whose stored status does not parse are logged and dropped rather
/// than failing the sweep.
pub fn at_risk_lines(orders: &[OrderWithOwner], now: DateTime<Utc>) -> Vec<AtRiskOrder> {
    orders
        .iter()
        .filter_map(|order| {
            let status = match order.status() {
                Ok(status) => status,
                Err(e) => {
                    tracing::error!(order_id = order.id, error = %e, "Corrupt status, dropped from sweep");
                    return None;
                }
            };
            Some(AtRiskOrder {
                po_number: order.po_number.clone(),
                status,
                client_name: order.client_name.clone(),
                date_required: order.date_required,
                days_remaining: ordertrack_core::alerts::days_remaining(order.date_required, now),
                owner_email: order.owner_email.clone(),
                owner_company: order.owner_company.clone(),
            })
        })
        .collect()
}

/// Group alert lines by the owner's email address.
///
/// Lines without an owner email cannot be delivered to an owner and are
/// excluded here; they still appear in the admin summary.
pub fn group_by_owner(lines: &[AtRiskOrder]) -> BTreeMap<String, Vec<AtRiskOrder>> {
    let mut groups: BTreeMap<String, Vec<AtRiskOrder>> = BTreeMap::new();
    for line in lines {
        if let Some(email) = &line.owner_email {
            groups.entry(email.clone()).or_default().push(line.clone());
        }
    }
    groups
}

/// Runs deadline alert sweeps.
pub struct DeadlineAlertEngine {
    pool: DbPool,
    mailer: Option<Arc<Mailer>>,
}

impl DeadlineAlertEngine {
    pub fn new(pool: DbPool, mailer: Option<Arc<Mailer>>) -> Self {
        Self { pool, mailer }
    }

    /// Run one alert sweep.
    pub async fn run(&self) -> Result<AlertSummary, EngineError> {
        let threshold = SettingRepo::alert_days_threshold(&self.pool).await?;
        let now = Utc::now();
        let today = now.date_naive();
        let until = today + chrono::Duration::days(threshold);

        let orders = OrderRepo::list_due_within(&self.pool, today, until).await?;
        if orders.is_empty() {
            tracing::debug!(threshold, "No orders approaching their due date");
            return Ok(AlertSummary::default());
        }

        // Read the recipient list up front: a storage error here aborts the
        // sweep before any email goes out.
        let recipients = AlertRecipientRepo::list_active(&self.pool).await?;

        let lines = at_risk_lines(&orders, now);
        let mut summary = AlertSummary {
            at_risk: lines.len(),
            ..Default::default()
        };
        tracing::info!(
            at_risk = lines.len(),
            threshold,
            recipients = recipients.len(),
            "Deadline alert sweep started"
        );

        let Some(mailer) = &self.mailer else {
            tracing::warn!("SMTP not configured, deadline alerts not sent");
            return Ok(summary);
        };

        for (owner_email, owner_lines) in group_by_owner(&lines) {
            let subject = templates::owner_alert_subject(owner_lines.len());
            let body = templates::owner_alert_body(&owner_lines, threshold);
            if mailer.send(&owner_email, &subject, &body).await.is_sent() {
                summary.owner_emails_sent += 1;
            }
        }

        if recipients.is_empty() {
            tracing::debug!("No active alert recipients, skipping admin summary");
        } else {
            let subject = templates::admin_summary_subject(lines.len());
            let body = templates::admin_summary_body(&lines, threshold);
            for recipient in &recipients {
                if mailer.send(&recipient.email, &subject, &body).await.is_sent() {
                    summary.admin_emails_sent += 1;
                }
            }
        }

        tracing::info!(
            at_risk = summary.at_risk,
            owner_emails_sent = summary.owner_emails_sent,
            admin_emails_sent = summary.admin_emails_sent,
            "Deadline alert sweep completed"
        );
        Ok(summary)
    }
}
