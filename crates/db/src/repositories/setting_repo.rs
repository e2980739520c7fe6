//! Repository for the `settings` table.

use ordertrack_core::alerts::DEFAULT_ALERT_DAYS_THRESHOLD;
use sqlx::PgPool;

use crate::models::setting::ALERT_DAYS_THRESHOLD;

pub struct SettingRepo;

impl SettingRepo {
    /// Fetch a raw setting value.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a setting value.
    pub async fn set(pool: &PgPool, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// The deadline-alert window in days.
    ///
    /// Read fresh on every sweep. Falls back to the default when the row is
    /// missing or the value does not parse.
    pub async fn alert_days_threshold(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let raw = Self::get(pool, ALERT_DAYS_THRESHOLD).await?;
        Ok(raw
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_ALERT_DAYS_THRESHOLD))
    }
}
