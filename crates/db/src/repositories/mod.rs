//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod alert_recipient_repo;
pub mod order_repo;
pub mod setting_repo;
pub mod status_history_repo;
pub mod user_repo;

pub use alert_recipient_repo::AlertRecipientRepo;
pub use order_repo::OrderRepo;
pub use setting_repo::SettingRepo;
pub use status_history_repo::StatusHistoryRepo;
pub use user_repo::UserRepo;
