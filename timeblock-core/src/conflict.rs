//! Pairwise conflict detection over one day's events.
//!
//! The detector sweeps the events in start order while keeping the set of
//! still-open intervals ordered by end time, so every pairwise overlap is
//! found, including non-adjacent ones (a long event spanning several short
//! ones conflicts with each of them). A naive compare-consecutive-events
//! scan misses those.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Two overlapping events, ordered so that
/// `event_a.start_time <= event_b.start_time` (tie broken by id).
///
/// Conflicts are derived values: they are recomputed from the current event
/// set on demand and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub event_a: Event,
    pub event_b: Event,
    /// Length of the shared span in whole minutes, a partial minute
    /// rounded up; always > 0.
    pub overlap_minutes: i64,
}

/// Find every pairwise overlap in `events`.
///
/// The caller is expected to pass one user's one-day slice; the detector
/// never filters by day itself. Output is ordered by
/// `(event_a.start_time, event_b.start_time)` with id tie-breaks, so two
/// runs over the same set produce identical results.
pub fn detect_conflicts(events: &[Event]) -> Vec<Conflict> {
    if events.len() < 2 {
        return Vec::new();
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.id.cmp(&b.id))
    });

    // Open set keyed by (end, id, index into `sorted`) so expired
    // intervals evict from the front in O(log n).
    let mut open: BTreeSet<(DateTime<Utc>, String, usize)> = BTreeSet::new();
    let mut conflicts = Vec::new();

    for (idx, event) in sorted.iter().enumerate() {
        // Half-open semantics: an event ending exactly at this start is
        // already closed.
        while open
            .first()
            .is_some_and(|(end, _, _)| *end <= event.start_time)
        {
            open.pop_first();
        }

        // Everything still open ends after this start, so each pair is a
        // genuine overlap, including ones under a minute.
        for &(_, _, open_idx) in &open {
            let earlier = sorted[open_idx];
            let overlap = earlier.interval().overlap(&event.interval());
            conflicts.push(Conflict {
                event_a: earlier.clone(),
                event_b: (*event).clone(),
                overlap_minutes: ceil_minutes(overlap),
            });
        }

        open.insert((event.end_time, event.id.clone(), idx));
    }

    conflicts.sort_by(|x, y| {
        x.event_a
            .start_time
            .cmp(&y.event_a.start_time)
            .then_with(|| x.event_b.start_time.cmp(&y.event_b.start_time))
            .then_with(|| x.event_a.id.cmp(&y.event_a.id))
            .then_with(|| x.event_b.id.cmp(&y.event_b.id))
    });

    conflicts
}

/// Whole-minute magnitude of an overlap, rounding a partial minute up so
/// any real overlap reports at least one minute.
fn ceil_minutes(overlap: Duration) -> i64 {
    ((overlap.num_seconds() + 59) / 60).max(1)
}
