//! Deadline-alert window math.
//!
//! An order is at risk when it has not been received and its required date
//! falls inside the inclusive window `[today, today + threshold]`. Alert
//! emails annotate each order with the number of days remaining (ceiling)
//! and flag it as urgent once that drops to [`URGENT_DAYS`] or below.

use chrono::{DateTime, NaiveDate, Utc};

use crate::status::OrderStatus;

/// Days-remaining value at or below which an order is flagged urgent.
pub const URGENT_DAYS: i64 = 2;

/// Default alert window when the `alert_days_threshold` setting is absent
/// or unparseable.
pub const DEFAULT_ALERT_DAYS_THRESHOLD: i64 = 5;

const SECS_PER_DAY: i64 = 86_400;

/// Days remaining until midnight UTC at the start of the required date,
/// rounded up.
///
/// An order due tomorrow yields `1`; once the due date's midnight has
/// passed (the order is due today or earlier) the value is zero or
/// negative.
pub fn days_remaining(date_required: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due_midnight = date_required
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc();
    let secs = (due_midnight - now).num_seconds();
    // Ceiling division that is correct for negative deltas too.
    -((-secs).div_euclid(SECS_PER_DAY))
}

/// Whether a due date falls inside the inclusive alert window.
pub fn within_window(date_required: NaiveDate, today: NaiveDate, threshold_days: i64) -> bool {
    date_required >= today && date_required <= today + chrono::Duration::days(threshold_days)
}

/// Whether an order qualifies for a deadline alert.
pub fn is_at_risk(
    status: OrderStatus,
    date_required: NaiveDate,
    today: NaiveDate,
    threshold_days: i64,
) -> bool {
    status != OrderStatus::Received && within_window(date_required, today, threshold_days)
}

/// Whether a days-remaining value warrants the urgent visual flag.
pub fn is_urgent(days: i64) -> bool {
    days <= URGENT_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_within_threshold_is_in_window() {
        let today = date(2024, 1, 1);
        assert!(within_window(date(2024, 1, 4), today, 5));
        assert!(within_window(date(2024, 1, 1), today, 5));
        assert!(within_window(date(2024, 1, 6), today, 5));
    }

    #[test]
    fn due_past_threshold_is_out_of_window() {
        let today = date(2024, 1, 1);
        assert!(!within_window(date(2024, 1, 10), today, 5));
        assert!(!within_window(date(2024, 1, 7), today, 5));
    }

    #[test]
    fn overdue_orders_are_out_of_window() {
        assert!(!within_window(date(2023, 12, 31), date(2024, 1, 1), 5));
    }

    #[test]
    fn received_orders_are_never_at_risk() {
        let today = date(2024, 1, 1);
        assert!(!is_at_risk(OrderStatus::Received, date(2024, 1, 3), today, 5));
        assert!(is_at_risk(OrderStatus::Pending, date(2024, 1, 4), today, 5));
        assert!(is_at_risk(OrderStatus::Shipped, date(2024, 1, 4), today, 5));
    }

    #[test]
    fn days_remaining_rounds_up() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        // Due 2024-01-04 00:00 UTC, 2.5 days away -> ceil to 3.
        assert_eq!(days_remaining(date(2024, 1, 4), now), 3);
        // Exactly at midnight of the due date.
        let midnight = Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(date(2024, 1, 4), midnight), 0);
        // Past due.
        assert_eq!(days_remaining(date(2024, 1, 1), now), 0);
        assert_eq!(days_remaining(date(2023, 12, 30), now), -2);
    }

    #[test]
    fn urgency_flag_at_two_days_or_less() {
        assert!(is_urgent(2));
        assert!(is_urgent(1));
        assert!(is_urgent(0));
        assert!(!is_urgent(3));
    }
}
