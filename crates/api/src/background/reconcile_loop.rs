//! Periodic order status reconciliation.
//!
//! Spawns the reconciliation engine on a fixed interval (5 minutes by
//! default). Runs until the token is cancelled. A failed pass is logged
//! and retried on the next tick; overlapping runs are not prevented here
//! because each order's write pair is its own unit of concurrency control.

use std::sync::Arc;
use std::time::Duration;

use ordertrack_engine::ReconcileEngine;
use tokio_util::sync::CancellationToken;

/// Run the reconciliation loop.
pub async fn run(engine: Arc<ReconcileEngine>, period: Duration, cancel: CancellationToken) {
    tracing::info!(period_secs = period.as_secs(), "Reconciliation loop started");

    let mut interval = tokio::time::interval(period);
    // The first tick fires immediately; skip it so startup does not race
    // the migrations/bootstrap of a fresh deployment.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reconciliation loop stopping");
                break;
            }
            _ = interval.tick() => {
                if let Err(e) = engine.run(None).await {
                    tracing::error!(error = %e, "Scheduled reconciliation pass failed");
                }
            }
        }
    }
}
