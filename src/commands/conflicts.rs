use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::day::parse_day;
use timeblock_core::{detect_conflicts, EventStore};

use crate::render::print_conflicts;
use crate::store::JsonStore;

pub fn run(store: &JsonStore, user: &str, day: &str) -> Result<()> {
    let day = parse_day(day)?;

    let events = store.events_for_day(user, day)?;
    let conflicts = detect_conflicts(&events);

    if conflicts.is_empty() {
        println!("{} No conflicts on {day}", "✓".green());
        return Ok(());
    }

    println!("{} conflict(s) on {day}:", conflicts.len());
    print_conflicts(&conflicts);
    println!();
    println!(
        "{}",
        "Resolve with `timeblock resolve <n> --strategy shift:30|next-day|shorten:0.8` or --auto."
            .dimmed()
    );

    Ok(())
}
