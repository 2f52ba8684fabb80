//! The event persistence boundary.
//!
//! The core never owns storage: detection and resolution read and return
//! events, and whatever implements `EventStore` decides how they persist.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;

/// Authoritative event storage for a user's calendar.
pub trait EventStore {
    /// All events for one user anchored to the given day, unordered.
    fn events_for_day(&self, user_id: &str, day: NaiveDate) -> ScheduleResult<Vec<Event>>;

    /// Insert or replace an event.
    ///
    /// Plain implementations are last-write-wins. Versioning
    /// implementations may reject a write whose record is older than the
    /// stored one with `StaleWrite`.
    fn put(&mut self, event: Event) -> ScheduleResult<Event>;

    /// Remove an event; `EventNotFound` when no such id exists.
    fn delete(&mut self, id: &str) -> ScheduleResult<()>;
}

/// HashMap-backed store for tests and dry runs. Last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: HashMap<String, Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for MemoryStore {
    fn events_for_day(&self, user_id: &str, day: NaiveDate) -> ScheduleResult<Vec<Event>> {
        Ok(self
            .events
            .values()
            .filter(|e| e.user_id == user_id && e.date == day)
            .cloned()
            .collect())
    }

    fn put(&mut self, event: Event) -> ScheduleResult<Event> {
        self.events.insert(event.id.clone(), event.clone());
        Ok(event)
    }

    fn delete(&mut self, id: &str) -> ScheduleResult<()> {
        self.events
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ScheduleError::EventNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_events_for_day_filters_by_user_and_day() {
        let mut store = MemoryStore::new();
        store
            .put(Event::new("Mine today", at(20, 9), at(20, 10), "user-1").unwrap())
            .unwrap();
        store
            .put(Event::new("Mine tomorrow", at(21, 9), at(21, 10), "user-1").unwrap())
            .unwrap();
        store
            .put(Event::new("Theirs", at(20, 9), at(20, 10), "user-2").unwrap())
            .unwrap();

        let day = at(20, 0).date_naive();
        let events = store.events_for_day("user-1", day).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Mine today");
    }

    #[test]
    fn test_put_replaces_by_id() {
        let mut store = MemoryStore::new();
        let mut event = Event::new("Draft", at(20, 9), at(20, 10), "user-1").unwrap();
        store.put(event.clone()).unwrap();

        event.title = "Final".to_string();
        store.put(event.clone()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&event.id).unwrap().title, "Final");
    }

    #[test]
    fn test_delete_missing_event_errors() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.delete("nope"),
            Err(ScheduleError::EventNotFound(_))
        ));
    }
}
