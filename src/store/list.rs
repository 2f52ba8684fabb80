//! Read every event file in the events directory.

use super::StoredEvent;
use std::path::Path;
use timeblock_core::{Event, ScheduleResult};
use tracing::warn;

/// Load all .json event files in `dir`. Files that fail to parse are
/// skipped with a warning rather than failing the whole listing.
pub fn list(dir: &Path) -> ScheduleResult<Vec<StoredEvent>> {
    let mut events = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let content = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<Event>(&content) {
            Ok(event) => events.push(StoredEvent { path, event }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unparseable event file");
            }
        }
    }

    Ok(events)
}
