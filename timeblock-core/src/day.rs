//! Day parsing and day-boundary helpers.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{ScheduleError, ScheduleResult};

/// Parse a day argument: "today", "tomorrow", or YYYY-MM-DD.
pub fn parse_day(s: &str) -> ScheduleResult<NaiveDate> {
    match s {
        "today" => Ok(Utc::now().date_naive()),
        "tomorrow" => Ok(Utc::now().date_naive() + Duration::days(1)),
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ScheduleError::InvalidDay(s.to_string())),
    }
}

/// Start of the given day (midnight, UTC).
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// First instant after the given day (the next day's midnight).
/// Intervals are half-open, so an event ending exactly here still
/// belongs to `date`.
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    day_start(date + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_explicit_day() {
        let day = parse_day("2025-03-20").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_day("20/03/2025"),
            Err(ScheduleError::InvalidDay(_))
        ));
    }

    #[test]
    fn test_tomorrow_is_one_day_after_today() {
        let today = parse_day("today").unwrap();
        let tomorrow = parse_day("tomorrow").unwrap();
        assert_eq!(tomorrow - today, Duration::days(1));
    }

    #[test]
    fn test_day_bounds_span_exactly_24_hours() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(day_end(day) - day_start(day), Duration::hours(24));
    }
}
