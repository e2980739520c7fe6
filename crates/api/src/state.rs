use std::sync::Arc;

use ordertrack_engine::{DeadlineAlertEngine, ReconcileEngine};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ordertrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reconciliation engine, shared with the background loop.
    pub reconcile: Arc<ReconcileEngine>,
    /// Deadline alert engine, shared with the background loop.
    pub alerts: Arc<DeadlineAlertEngine>,
}
