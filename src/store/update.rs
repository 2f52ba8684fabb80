//! Rewrite an existing event file.

use super::{create, StoredEvent};
use std::path::Path;
use timeblock_core::{Event, ScheduleError, ScheduleResult};

/// Replace `stored` with `event`.
///
/// Rejects the write when the stored record is newer than the incoming one
/// (another writer got there first). When the start time or title changed,
/// the file moves to its new name and the old one is removed.
pub fn update(dir: &Path, stored: StoredEvent, event: Event) -> ScheduleResult<Event> {
    if stored.event.updated_at > event.updated_at {
        return Err(ScheduleError::StaleWrite(event.id.clone()));
    }

    let new_path = dir.join(create::filename_for(&event));
    let content = serde_json::to_string_pretty(&event)
        .map_err(|e| ScheduleError::Serialization(e.to_string()))?;
    std::fs::write(&new_path, content)?;

    if stored.path != new_path {
        std::fs::remove_file(&stored.path)?;
    }

    Ok(event)
}
