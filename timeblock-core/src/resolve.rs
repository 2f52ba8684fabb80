//! Resolution strategies for schedule conflicts.
//!
//! A strategy rewrites the event(s) of one conflict and returns the full
//! updated records. Nothing is persisted here: the caller writes the
//! results through its store and re-runs detection, since a shift can
//! introduce a fresh overlap with a third event.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::conflict::Conflict;
use crate::day::day_end;
use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;

/// How to eliminate one conflict. There is no default: auto-resolution is
/// caller policy (e.g. always pass `ShiftLater` and fall back to
/// `MoveToNextDay` on `WouldCrossDayBoundary`), never a hidden choice made
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Move the later-starting event forward, preserving its duration.
    ShiftLater { minutes: i64 },
    /// Move the later-starting event forward by exactly 24 hours.
    MoveToNextDay,
    /// Multiply both events' durations by `factor`, keeping starts fixed.
    ShortenBoth { factor: f64 },
}

/// Apply `strategy` to `conflict`, returning the updated event(s) with
/// `updated_at` refreshed.
pub fn resolve(conflict: &Conflict, strategy: Strategy) -> ScheduleResult<Vec<Event>> {
    match strategy {
        Strategy::ShiftLater { minutes } => {
            let mut event = conflict.event_b.clone();
            let shifted_end = event.end_time + Duration::minutes(minutes);
            // Ending exactly at midnight is fine: the interval is
            // half-open, so the event still belongs to its day.
            if shifted_end > day_end(event.date) {
                return Err(ScheduleError::WouldCrossDayBoundary);
            }
            event.shift_by(Duration::minutes(minutes));
            Ok(vec![event])
        }
        Strategy::MoveToNextDay => {
            let mut event = conflict.event_b.clone();
            event.shift_by(Duration::hours(24));
            Ok(vec![event])
        }
        Strategy::ShortenBoth { factor } => {
            if factor <= 0.0 || factor >= 1.0 {
                return Err(ScheduleError::InvalidFactor(factor));
            }
            let mut updated = Vec::with_capacity(2);
            for source in [&conflict.event_a, &conflict.event_b] {
                let mut event = source.clone();
                // Factor applies to the duration at call time, so repeated
                // shortening compounds.
                let seconds = event.duration().num_seconds() as f64 * factor;
                let end = event.start_time + Duration::seconds(seconds.round() as i64);
                event.set_times(event.start_time, end)?;
                updated.push(event);
            }
            Ok(updated)
        }
    }
}
