/// Errors that abort an entire engine pass.
///
/// Per-order and per-recipient failures are isolated inside the pass and
/// never surface here; only load-phase problems (order list, settings,
/// recipient list) are fatal.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
