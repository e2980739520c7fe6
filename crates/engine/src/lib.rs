//! The scheduler-facing core of the ordertrack platform.
//!
//! Two entry points, both safe to invoke on a timer or on demand from an
//! authorized request handler:
//!
//! - [`ReconcileEngine::run`] sweeps tracked orders, resolves each against
//!   the external inventory, persists status transitions with an audit
//!   trail, and emails owners after commit.
//! - [`DeadlineAlertEngine::run`] finds orders at risk of missing their
//!   required date and fans out owner and admin alert emails.

pub mod deadline;
pub mod error;
pub mod reconcile;
pub mod resolver;

pub use deadline::{AlertSummary, DeadlineAlertEngine};
pub use error::EngineError;
pub use reconcile::{ReconcileEngine, ReconcileSummary};
pub use resolver::{resolve_order, LookupResolution};
