//! Repository for the `orders` table.

use chrono::NaiveDate;
use ordertrack_core::types::DbId;
use ordertrack_core::OrderStatus;
use sqlx::PgPool;

use crate::models::order::{Order, OrderWithOwner, UpsertOrder};

/// Column list for `orders` queries.
const COLUMNS: &str = "id, user_id, po_number, client_name, date_required, status, notes, \
     last_checked_at, last_status_change_at, created_at, updated_at";

/// Column list for owner-joined sweep queries.
const JOINED_COLUMNS: &str = "o.id, o.user_id, o.po_number, o.client_name, o.date_required, \
     o.status, o.last_checked_at, o.last_status_change_at, \
     u.email AS owner_email, u.company_name AS owner_company";

/// Provides persistence operations for tracked orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Create or update an order on its `(user_id, po_number)` business key.
    ///
    /// Status and reconciliation timestamps are owned by the engine and are
    /// never touched by an upsert.
    pub async fn upsert(pool: &PgPool, input: &UpsertOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (user_id, po_number, client_name, date_required, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_orders_user_po DO UPDATE SET \
                 client_name = EXCLUDED.client_name, \
                 date_required = EXCLUDED.date_required, \
                 notes = EXCLUDED.notes, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(input.user_id)
            .bind(&input.po_number)
            .bind(&input.client_name)
            .bind(input.date_required)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Fetch an order by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load every tracked order joined with its owner, optionally restricted
    /// to owners of one company.
    ///
    /// All statuses are included — already-received orders are re-examined
    /// every pass because backward transitions are allowed.
    pub async fn list_for_reconciliation(
        pool: &PgPool,
        owner_company: Option<&str>,
    ) -> Result<Vec<OrderWithOwner>, sqlx::Error> {
        let filter = if owner_company.is_some() {
            "WHERE u.company_name = $1"
        } else {
            ""
        };
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM orders o \
             LEFT JOIN users u ON o.user_id = u.id \
             {filter} \
             ORDER BY o.id"
        );
        let mut q = sqlx::query_as::<_, OrderWithOwner>(&query);
        if let Some(company) = owner_company {
            q = q.bind(company);
        }
        q.fetch_all(pool).await
    }

    /// Load not-yet-received orders whose required date falls in the
    /// inclusive `[from, to]` window, joined with their owners.
    pub async fn list_due_within(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<OrderWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM orders o \
             LEFT JOIN users u ON o.user_id = u.id \
             WHERE o.status <> 'received' \
             AND o.date_required >= $1 AND o.date_required <= $2 \
             ORDER BY o.date_required, o.id"
        );
        sqlx::query_as::<_, OrderWithOwner>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Record a successful check that produced no transition: bump
    /// `last_checked_at` only.
    pub async fn touch_checked(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE orders SET last_checked_at = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Apply a status transition atomically.
    ///
    /// Runs in a transaction: update status + `last_checked_at` +
    /// `last_status_change_at`, then insert the audit row. The caller sends
    /// any notification strictly after this commits.
    pub async fn apply_transition(
        pool: &PgPool,
        id: DbId,
        old_status: OrderStatus,
        new_status: OrderStatus,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE orders \
             SET status = $1, last_checked_at = now(), \
                 last_status_change_at = now(), updated_at = now() \
             WHERE id = $2",
        )
        .bind(new_status.as_str())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO status_history (order_id, old_status, new_status) \
             VALUES ($1, $2, $3)",
        )
        .bind(id)
        .bind(old_status.as_str())
        .bind(new_status.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete an order. Returns `true` if a row was removed.
    ///
    /// History rows cascade with the order.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
