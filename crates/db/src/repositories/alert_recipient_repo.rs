//! Repository for the `alert_recipients` table.

use ordertrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert_recipient::AlertRecipient;

const COLUMNS: &str = "id, email, is_active, created_at";

pub struct AlertRecipientRepo;

impl AlertRecipientRepo {
    /// List recipients that should receive the admin summary.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<AlertRecipient>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alert_recipients \
             WHERE is_active = true \
             ORDER BY email"
        );
        sqlx::query_as::<_, AlertRecipient>(&query)
            .fetch_all(pool)
            .await
    }

    /// Register a recipient, returning the generated ID.
    pub async fn create(pool: &PgPool, email: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO alert_recipients (email) VALUES ($1) RETURNING id")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Activate or deactivate a recipient. Returns `true` when found.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE alert_recipients SET is_active = $1 WHERE id = $2")
            .bind(is_active)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
