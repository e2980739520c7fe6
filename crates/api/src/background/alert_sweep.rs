//! Daily deadline alert sweeps.
//!
//! Sleeps until the next configured UTC hour (09:00 and 17:00 by default),
//! runs the sweep, and repeats. Runs until the token is cancelled.

use std::sync::Arc;

use chrono::Utc;
use ordertrack_core::schedule::next_daily_run;
use ordertrack_engine::DeadlineAlertEngine;
use tokio_util::sync::CancellationToken;

/// Run the deadline alert loop.
pub async fn run(engine: Arc<DeadlineAlertEngine>, hours: Vec<u32>, cancel: CancellationToken) {
    tracing::info!(?hours, "Deadline alert loop started");

    loop {
        let now = Utc::now();
        let next = next_daily_run(now, &hours);
        let sleep_for = (next - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        tracing::debug!(next_run = %next, "Next deadline alert sweep scheduled");

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Deadline alert loop stopping");
                break;
            }
            _ = tokio::time::sleep(sleep_for) => {
                if let Err(e) = engine.run().await {
                    tracing::error!(error = %e, "Scheduled deadline alert sweep failed");
                }
            }
        }
    }
}
