//! "Run now" entry points for the two scheduled jobs.
//!
//! Authentication is handled outside this service; callers reaching these
//! routes are trusted. A client-scoped caller passes its company name as
//! the `company` query parameter to restrict the pass to its own orders.

use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `POST /reconcile`.
#[derive(Debug, Deserialize)]
pub struct ReconcileQuery {
    /// Restrict the pass to orders owned by users of this company.
    pub company: Option<String>,
}

/// POST /api/v1/reconcile
///
/// Run a reconciliation pass synchronously and return its summary.
async fn run_reconcile(
    State(state): State<AppState>,
    Query(query): Query<ReconcileQuery>,
) -> AppResult<Json<DataResponse<ordertrack_engine::ReconcileSummary>>> {
    let summary = state.reconcile.run(query.company.as_deref()).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// POST /api/v1/alerts/run
///
/// Run a deadline alert sweep synchronously and return its summary.
async fn run_alerts(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ordertrack_engine::AlertSummary>>> {
    let summary = state.alerts.run().await?;
    Ok(Json(DataResponse { data: summary }))
}

/// Routes mounted at the `/api/v1` root.
///
/// ```text
/// POST   /reconcile       -> run_reconcile
/// POST   /alerts/run      -> run_alerts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reconcile", post(run_reconcile))
        .route("/alerts/run", post(run_alerts))
}
