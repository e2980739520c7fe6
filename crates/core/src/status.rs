//! The portal order status enumeration.
//!
//! Statuses are stored as lowercase TEXT in the `orders.status` column
//! (guarded by a CHECK constraint) and round-tripped through
//! [`OrderStatus::as_str`] / [`OrderStatus::parse`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a tracked order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Received,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Received,
    ];

    /// The database TEXT representation.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Received => "received",
        }
    }

    /// Parse a database TEXT value back into a status.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "received" => Ok(OrderStatus::Received),
            other => Err(CoreError::Validation(format!(
                "Unknown order status: {other}"
            ))),
        }
    }

    /// Human-readable phrase used in status-change notification emails.
    pub fn change_phrase(self) -> &'static str {
        match self {
            OrderStatus::Pending => "is pending",
            OrderStatus::Processing => "is being processed",
            OrderStatus::Shipped => "has been shipped",
            OrderStatus::Received => "has been received",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_variants() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn parse_rejects_unknown_value() {
        assert!(OrderStatus::parse("delivered").is_err());
        assert!(OrderStatus::parse("").is_err());
        assert!(OrderStatus::parse("Pending").is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
        let back: OrderStatus = serde_json::from_str("\"received\"").unwrap();
        assert_eq!(back, OrderStatus::Received);
    }
}
