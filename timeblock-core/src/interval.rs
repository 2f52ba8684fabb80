//! Pure interval math over event time ranges.
//!
//! Intervals are half-open `[start, end)`: back-to-back events, where one
//! ends exactly when the next starts, do not overlap.

use chrono::{DateTime, Duration, Utc};

use crate::error::{ScheduleError, ScheduleResult};

/// A validated time range with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Build an interval, rejecting zero and negative durations.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ScheduleResult<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval);
        }
        Ok(Interval { start, end })
    }

    /// Internal constructor for ranges whose invariant is already enforced
    /// (an `Event`'s times are validated at construction and on mutation).
    pub(crate) fn new_unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True iff the two ranges share a non-zero span of time.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the shared span; zero when disjoint.
    pub fn overlap(&self, other: &Interval) -> Duration {
        let latest_start = self.start.max(other.start);
        let earliest_end = self.end.min(other.end);
        (earliest_end - latest_start).max(Duration::zero())
    }

    /// Length of the shared span in whole minutes; 0 when disjoint.
    /// Truncates: a 30-second overlap reports 0 minutes here but is
    /// still an overlap per `overlaps`.
    pub fn overlap_minutes(&self, other: &Interval) -> i64 {
        self.overlap(other).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, hour, min, 0).unwrap()
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(matches!(
            Interval::new(at(9, 0), at(9, 0)),
            Err(ScheduleError::InvalidInterval)
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(
            Interval::new(at(10, 0), at(9, 0)),
            Err(ScheduleError::InvalidInterval)
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Interval::new(at(9, 0), at(9, 30)).unwrap();
        let b = Interval::new(at(9, 15), at(10, 0)).unwrap();

        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlap_minutes(&b), b.overlap_minutes(&a));
        assert_eq!(a.overlap_minutes(&b), 15);
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let a = Interval::new(at(9, 0), at(10, 0)).unwrap();
        let b = Interval::new(at(10, 0), at(11, 0)).unwrap();

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert_eq!(a.overlap_minutes(&b), 0);
    }

    #[test]
    fn test_containment_overlap_is_inner_duration() {
        let outer = Interval::new(at(9, 0), at(12, 0)).unwrap();
        let inner = Interval::new(at(10, 0), at(10, 45)).unwrap();

        assert!(outer.overlaps(&inner));
        assert_eq!(outer.overlap_minutes(&inner), 45);
    }

    #[test]
    fn test_subminute_overlap_is_a_real_overlap() {
        let a = Interval::new(
            at(9, 0),
            at(9, 0) + Duration::seconds(30),
        )
        .unwrap();
        let b = Interval::new(
            at(9, 0) + Duration::seconds(15),
            at(9, 1),
        )
        .unwrap();

        assert!(a.overlaps(&b));
        assert_eq!(a.overlap(&b), Duration::seconds(15));
        // Minute truncation loses the sub-minute span; callers that need
        // a positive magnitude work from `overlap` instead.
        assert_eq!(a.overlap_minutes(&b), 0);
    }

    #[test]
    fn test_disjoint_overlap_is_zero() {
        let a = Interval::new(at(9, 0), at(9, 30)).unwrap();
        let b = Interval::new(at(11, 0), at(11, 30)).unwrap();

        assert!(!a.overlaps(&b));
        assert_eq!(a.overlap_minutes(&b), 0);
        assert_eq!(b.overlap_minutes(&a), 0);
    }
}
