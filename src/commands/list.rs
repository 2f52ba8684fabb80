use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::day::parse_day;
use timeblock_core::{detect_conflicts, EventStore};

use crate::render::Render;
use crate::store::JsonStore;

pub fn run(store: &JsonStore, user: &str, day: &str) -> Result<()> {
    let day = parse_day(day)?;

    let mut events = store.events_for_day(user, day)?;
    if events.is_empty() {
        println!("No events on {day}");
        return Ok(());
    }
    events.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.id.cmp(&b.id))
    });

    println!("{}", day.to_string().bold());
    for event in &events {
        println!("  {}", event.render());
    }

    let conflicts = detect_conflicts(&events);
    if !conflicts.is_empty() {
        println!();
        println!(
            "{}",
            format!(
                "{} conflict(s) on this day. See `timeblock conflicts --day {day}`.",
                conflicts.len()
            )
            .red()
        );
    }

    Ok(())
}
