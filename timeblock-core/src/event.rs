//! Time-boxed schedule events.
//!
//! `Event` is the unit everything else operates on: the detector reads
//! slices of them, the resolver and optimizer merge produce rewritten
//! copies, and the store persists them. Construction and every time
//! mutation re-validate the interval invariant and re-derive `date`.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};
use crate::interval::Interval;

/// What kind of block this event occupies on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Meeting,
    Task,
    Break,
    Focus,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// A time-boxed calendar event belonging to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier, stable for the event's lifetime.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Calendar day the event is anchored to. Always derived from
    /// `start_time`; never set independently.
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub priority: Priority,
    /// Attendee identifiers (may be empty).
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Weak reference to a project; no ownership implied.
    pub project_id: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation, including resolver-driven ones.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event with a fresh id and audit timestamps.
    ///
    /// Fails with `InvalidInterval` when `start >= end` and `EmptyTitle`
    /// when the title is blank.
    pub fn new(
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        user_id: impl Into<String>,
    ) -> ScheduleResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        Interval::new(start_time, end_time)?;

        let now = Utc::now();
        Ok(Event {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            start_time,
            end_time,
            date: start_time.date_naive(),
            event_type: EventType::Other,
            priority: Priority::Medium,
            attendees: Vec::new(),
            project_id: None,
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn interval(&self) -> Interval {
        Interval::new_unchecked(self.start_time, self.end_time)
    }

    /// True iff this event shares a non-zero span of time with `other`.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.interval().overlaps(&other.interval())
    }

    /// Overlap with `other` in whole minutes; 0 when disjoint.
    pub fn overlap_minutes(&self, other: &Event) -> i64 {
        self.interval().overlap_minutes(&other.interval())
    }

    /// Replace both times, re-validating the interval and re-deriving `date`.
    pub fn set_times(
        &mut self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> ScheduleResult<()> {
        Interval::new(start_time, end_time)?;
        self.start_time = start_time;
        self.end_time = end_time;
        self.date = start_time.date_naive();
        self.touch();
        Ok(())
    }

    /// Move the whole event by `delta`, preserving its duration.
    pub fn shift_by(&mut self, delta: Duration) {
        self.start_time += delta;
        self.end_time += delta;
        self.date = self.start_time.date_naive();
        self.touch();
    }

    /// Refresh the audit timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
