//! Status transition audit records.

use ordertrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `status_history` table. Insert-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusHistoryEntry {
    pub id: DbId,
    pub order_id: DbId,
    pub old_status: String,
    pub new_status: String,
    pub changed_at: Timestamp,
}
