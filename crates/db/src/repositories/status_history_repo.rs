//! Repository for the `status_history` table.
//!
//! History rows are written only through
//! [`OrderRepo::apply_transition`](crate::repositories::OrderRepo::apply_transition);
//! this repository is read-only.

use ordertrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::status_history::StatusHistoryEntry;

const COLUMNS: &str = "id, order_id, old_status, new_status, changed_at";

pub struct StatusHistoryRepo;

impl StatusHistoryRepo {
    /// List an order's transitions, most recent first.
    pub async fn list_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<StatusHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM status_history \
             WHERE order_id = $1 \
             ORDER BY changed_at DESC, id DESC"
        );
        sqlx::query_as::<_, StatusHistoryEntry>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Count an order's transitions.
    pub async fn count_for_order(pool: &PgPool, order_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM status_history WHERE order_id = $1")
                .bind(order_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
