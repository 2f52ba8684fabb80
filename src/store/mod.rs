//! Local event file storage.
//!
//! Events persist as one JSON document per file in the events directory.
//! Filenames are human-readable (`2025-03-20T0900__standup__1a2b3c4d.json`)
//! so the directory is greppable; the id suffix keeps them unique.

mod create;
mod delete;
mod list;
mod update;

use std::path::PathBuf;

use chrono::NaiveDate;
use timeblock_core::{Event, EventStore, ScheduleError, ScheduleResult};

/// A calendar event stored as a local .json file.
pub struct StoredEvent {
    /// Path to the .json file
    pub path: PathBuf,
    /// The event data
    pub event: Event,
}

/// File-per-event store rooted at one directory.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> ScheduleResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(JsonStore { dir })
    }

    /// Every stored event, in no particular order.
    pub fn all(&self) -> ScheduleResult<Vec<StoredEvent>> {
        list::list(&self.dir)
    }

    /// Find a stored event by full id or unambiguous id prefix.
    pub fn find(&self, id: &str) -> ScheduleResult<StoredEvent> {
        let matches: Vec<StoredEvent> = self
            .all()?
            .into_iter()
            .filter(|s| s.event.id.starts_with(id))
            .collect();

        match matches.len() {
            1 => Ok(matches.into_iter().next().unwrap()),
            0 => Err(ScheduleError::EventNotFound(id.to_string())),
            n => Err(ScheduleError::Store(format!(
                "id prefix '{id}' is ambiguous ({n} matches)"
            ))),
        }
    }
}

impl EventStore for JsonStore {
    fn events_for_day(&self, user_id: &str, day: NaiveDate) -> ScheduleResult<Vec<Event>> {
        Ok(self
            .all()?
            .into_iter()
            .map(|s| s.event)
            .filter(|e| e.user_id == user_id && e.date == day)
            .collect())
    }

    fn put(&mut self, event: Event) -> ScheduleResult<Event> {
        let existing = self
            .all()?
            .into_iter()
            .find(|s| s.event.id == event.id);

        match existing {
            Some(stored) => update::update(&self.dir, stored, event),
            None => create::create(&self.dir, event).map(|s| s.event),
        }
    }

    fn delete(&mut self, id: &str) -> ScheduleResult<()> {
        let stored = self
            .all()?
            .into_iter()
            .find(|s| s.event.id == id)
            .ok_or_else(|| ScheduleError::EventNotFound(id.to_string()))?;
        delete::delete(&stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, hour, min, 0).unwrap()
    }

    fn event(title: &str) -> Event {
        Event::new(title, at(9, 0), at(10, 0), "user-1").unwrap()
    }

    #[test]
    fn test_put_then_read_back_by_day() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();

        let created = store.put(event("Standup")).unwrap();
        let events = store
            .events_for_day("user-1", created.date)
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, created.id);
        assert_eq!(events[0].title, "Standup");
    }

    #[test]
    fn test_put_update_moves_file_when_day_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();

        let mut stored = store.put(event("Standup")).unwrap();
        let old_day = stored.date;
        stored
            .set_times(at(9, 0) + chrono::Duration::days(1), at(10, 0) + chrono::Duration::days(1))
            .unwrap();
        store.put(stored.clone()).unwrap();

        assert!(store.events_for_day("user-1", old_day).unwrap().is_empty());
        assert_eq!(store.events_for_day("user-1", stored.date).unwrap().len(), 1);
        // The old file is gone, not orphaned.
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn test_stale_write_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();

        let created = store.put(event("Standup")).unwrap();

        let mut newer = created.clone();
        newer.touch();
        store.put(newer).unwrap();

        // A write based on the original record is now stale.
        let result = store.put(created);
        assert!(matches!(result, Err(ScheduleError::StaleWrite(_))));
    }

    #[test]
    fn test_find_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();

        let created = store.put(event("Standup")).unwrap();
        let found = store.find(&created.id[..8]).unwrap();

        assert_eq!(found.event.id, created.id);
        assert!(matches!(
            store.find("zzzzzzzz"),
            Err(ScheduleError::EventNotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();

        let created = store.put(event("Standup")).unwrap();
        store.delete(&created.id).unwrap();

        assert!(store.all().unwrap().is_empty());
    }
}
