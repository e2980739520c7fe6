//! Deadline-alert summary recipients.

use ordertrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alert_recipients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertRecipient {
    pub id: DbId,
    pub email: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}
