//! Create event files in the events directory.

use super::StoredEvent;
use crate::render::short_id;
use std::path::Path;
use timeblock_core::{Event, ScheduleError, ScheduleResult};

/// Write a new event file. The caller has already checked no file holds
/// this id.
pub fn create(dir: &Path, event: Event) -> ScheduleResult<StoredEvent> {
    let path = dir.join(filename_for(&event));
    let content = serde_json::to_string_pretty(&event)
        .map_err(|e| ScheduleError::Serialization(e.to_string()))?;
    std::fs::write(&path, content)?;

    Ok(StoredEvent { path, event })
}

/// Filename for an event: start time, title slug, id prefix.
/// The id prefix keeps names unique even for same-titled events at the
/// same time.
pub fn filename_for(event: &Event) -> String {
    format!(
        "{}__{}__{}.json",
        event.start_time.format("%Y-%m-%dT%H%M"),
        slugify(&event.title),
        short_id(&event.id),
    )
}

/// Convert a string to a filename-safe slug
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect()
}
