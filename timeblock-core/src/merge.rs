//! Merging externally computed schedule optimizations.
//!
//! The optimizer returns per-event field overrides, not a full schedule.
//! Merging is a shallow overlay: only the fields present in a patch change,
//! everything else is untouched. The result is just another event mutation,
//! so callers must re-run conflict detection afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::{Event, EventType, Priority};

/// Partial event: only the fields an optimizer wants to change, typically
/// the times.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub priority: Option<Priority>,
}

/// One optimizer suggestion: the target event id plus the fields to overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOverride {
    pub id: String,
    #[serde(flatten)]
    pub patch: EventPatch,
}

/// Apply `overrides` over `events`, returning the merged set.
///
/// Ids with no matching event are logged and skipped. Events are never
/// added or removed. The merge is all-or-nothing: a patch that would
/// produce an invalid record fails the whole call and the input set stands.
pub fn merge_overrides(
    events: &[Event],
    overrides: &[EventOverride],
) -> ScheduleResult<Vec<Event>> {
    let mut merged: Vec<Event> = events.to_vec();

    for entry in overrides {
        let Some(event) = merged.iter_mut().find(|e| e.id == entry.id) else {
            debug!(id = %entry.id, "ignoring override for unknown event");
            continue;
        };
        apply_patch(event, &entry.patch)?;
    }

    Ok(merged)
}

fn apply_patch(event: &mut Event, patch: &EventPatch) -> ScheduleResult<()> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        event.title = title.clone();
    }
    if let Some(description) = &patch.description {
        event.description = Some(description.clone());
    }
    if let Some(event_type) = patch.event_type {
        event.event_type = event_type;
    }
    if let Some(priority) = patch.priority {
        event.priority = priority;
    }

    // set_times re-validates the interval, re-derives `date` and refreshes
    // `updated_at`, which every patched event needs even when the times
    // themselves are unchanged.
    let start = patch.start_time.unwrap_or(event.start_time);
    let end = patch.end_time.unwrap_or(event.end_time);
    event.set_times(start, end)
}
