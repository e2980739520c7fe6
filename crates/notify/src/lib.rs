//! Outbound email for the ordertrack platform.
//!
//! [`mailer::Mailer`] wraps one async SMTP transport (lettre) behind a
//! `send` call that reports success or failure as a value and never
//! propagates an error past its boundary, so the engines can
//! log-and-continue. [`templates`] holds the pure HTML builders for the
//! three message kinds.

pub mod mailer;
pub mod templates;

pub use mailer::{Mailer, MailerConfig, SendOutcome};
