//! Scheduling math for the daily deadline-alert sweep.
//!
//! The sweep runs at fixed UTC hours (09:00 and 17:00 by default). The
//! background task computes the time of the next run from the wall clock
//! rather than carrying any cron machinery.

use chrono::{DateTime, Duration, Utc};

/// Default sweep hours (UTC) when `ALERT_SWEEP_HOURS` is not configured.
pub const DEFAULT_SWEEP_HOURS: [u32; 2] = [9, 17];

/// The next occurrence of any of `hours` (UTC, on the hour) strictly after
/// `now`.
///
/// `hours` must be non-empty; values above 23 are ignored. Falls back to the
/// earliest configured hour tomorrow when no slot remains today.
pub fn next_daily_run(now: DateTime<Utc>, hours: &[u32]) -> DateTime<Utc> {
    let mut hours: Vec<u32> = hours.iter().copied().filter(|h| *h < 24).collect();
    if hours.is_empty() {
        hours = DEFAULT_SWEEP_HOURS.to_vec();
    }
    hours.sort_unstable();

    let today_midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc();

    for &hour in &hours {
        let candidate = today_midnight + Duration::hours(i64::from(hour));
        if candidate > now {
            return candidate;
        }
    }
    today_midnight + Duration::days(1) + Duration::hours(i64::from(hours[0]))
}

/// Parse a comma-separated hour list (e.g. `"9,17"`), ignoring invalid
/// entries. Returns `None` when nothing valid remains.
pub fn parse_sweep_hours(value: &str) -> Option<Vec<u32>> {
    let hours: Vec<u32> = value
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .filter(|h| *h < 24)
        .collect();
    if hours.is_empty() {
        None
    } else {
        Some(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn picks_next_slot_today() {
        assert_eq!(next_daily_run(at(8, 0), &[9, 17]), at(9, 0));
        assert_eq!(next_daily_run(at(9, 30), &[9, 17]), at(17, 0));
    }

    #[test]
    fn rolls_over_to_tomorrow() {
        let next = next_daily_run(at(18, 0), &[9, 17]);
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap());
    }

    #[test]
    fn exact_slot_time_moves_to_following_slot() {
        assert_eq!(next_daily_run(at(9, 0), &[9, 17]), at(17, 0));
    }

    #[test]
    fn ignores_out_of_range_hours() {
        assert_eq!(next_daily_run(at(8, 0), &[25, 9]), at(9, 0));
    }

    #[test]
    fn parses_hour_lists() {
        assert_eq!(parse_sweep_hours("9,17"), Some(vec![9, 17]));
        assert_eq!(parse_sweep_hours(" 6 , 12 "), Some(vec![6, 12]));
        assert_eq!(parse_sweep_hours("bogus,99"), None);
        assert_eq!(parse_sweep_hours(""), None);
    }
}
