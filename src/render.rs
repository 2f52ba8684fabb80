//! Terminal rendering for timeblock types.
//!
//! Extension trait adding colored output to core types with owo_colors.

use owo_colors::OwoColorize;
use timeblock_core::{Conflict, Event, Priority};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
        let title = match self.priority {
            Priority::Critical => self.title.red().bold().to_string(),
            Priority::High => self.title.yellow().to_string(),
            Priority::Medium => self.title.clone(),
            Priority::Low => self.title.dimmed().to_string(),
        };

        format!(
            "{} {} {}",
            time.dimmed(),
            title,
            short_id(&self.id).dimmed()
        )
    }
}

impl Render for Conflict {
    fn render(&self) -> String {
        format!(
            "{} {} overlaps {} by {}",
            "!".red(),
            self.event_a.title.bold(),
            self.event_b.title.bold(),
            format!("{} min", self.overlap_minutes).red()
        )
    }
}

/// First eight characters of an id. Ids are normally ASCII uuids, but a
/// hand-edited event file can hold anything, so truncation respects char
/// boundaries instead of byte-slicing.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Print a conflict list the way every command reports it: numbered, so
/// `timeblock resolve <n>` can reference an entry.
pub fn print_conflicts(conflicts: &[Conflict]) {
    for (i, conflict) in conflicts.iter().enumerate() {
        println!("  {}. {}", i + 1, conflict.render());
    }
}
