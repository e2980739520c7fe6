//! Tracked-order entity models and DTOs.

use chrono::NaiveDate;
use ordertrack_core::types::{DbId, Timestamp};
use ordertrack_core::{CoreError, OrderStatus};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub po_number: String,
    pub client_name: Option<String>,
    pub date_required: NaiveDate,
    pub status: String,
    pub notes: Option<String>,
    pub last_checked_at: Option<Timestamp>,
    pub last_status_change_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Parse the stored status TEXT into the domain enum.
    ///
    /// The `ck_orders_status` constraint keeps the column to the four valid
    /// values, so a failure here indicates a corrupted row.
    pub fn status(&self) -> Result<OrderStatus, CoreError> {
        OrderStatus::parse(&self.status)
    }
}

/// An order joined with its owner, as loaded by the reconciliation and
/// deadline-alert sweeps.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderWithOwner {
    pub id: DbId,
    pub user_id: DbId,
    pub po_number: String,
    pub client_name: Option<String>,
    pub date_required: NaiveDate,
    pub status: String,
    pub last_checked_at: Option<Timestamp>,
    pub last_status_change_at: Option<Timestamp>,
    /// Owner's notification address; `None` when the owner row is missing.
    pub owner_email: Option<String>,
    /// Owner's company name, used by the scope filter and admin summaries.
    pub owner_company: Option<String>,
}

impl OrderWithOwner {
    /// Parse the stored status TEXT into the domain enum.
    pub fn status(&self) -> Result<OrderStatus, CoreError> {
        OrderStatus::parse(&self.status)
    }
}

/// DTO for creating or updating an order on its `(user_id, po_number)`
/// business key.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertOrder {
    pub user_id: DbId,
    pub po_number: String,
    pub client_name: Option<String>,
    pub date_required: NaiveDate,
    pub notes: Option<String>,
}
