//! Delete event files.

use super::StoredEvent;
use timeblock_core::ScheduleResult;

pub fn delete(stored: &StoredEvent) -> ScheduleResult<()> {
    std::fs::remove_file(&stored.path)?;
    Ok(())
}
