//! Key/value settings rows.

use ordertrack_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// Setting key for the deadline-alert window, in days.
pub const ALERT_DAYS_THRESHOLD: &str = "alert_days_threshold";

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}
