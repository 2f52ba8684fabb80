use anyhow::Result;
use owo_colors::OwoColorize;
use timeblock_core::day::parse_day;
use timeblock_core::optimizer::{merge_guarded, version_stamp, Optimizer};
use timeblock_core::protocol::{OptimizeRequest, Preferences};
use timeblock_core::{detect_conflicts, EventStore};

use crate::render::print_conflicts;
use crate::store::JsonStore;

pub async fn run(store: &mut JsonStore, user: &str, name: &str, day: &str) -> Result<()> {
    let day = parse_day(day)?;

    let events = store.events_for_day(user, day)?;
    if events.is_empty() {
        println!("Nothing to optimize on {day}");
        return Ok(());
    }

    let stamp = version_stamp(&events);
    let request = OptimizeRequest {
        events: events.clone(),
        tasks: Vec::new(),
        preferences: Preferences::default(),
    };

    let optimizer = Optimizer::from_name(name);
    println!("Asking optimizer '{}'...", optimizer.name());
    let overrides = optimizer.optimize(&request).await?;

    if overrides.is_empty() {
        println!("Optimizer had no suggestions for {day}");
        return Ok(());
    }

    // Re-read before merging: the set may have changed while the
    // optimizer was running, in which case its result is discarded.
    let current = store.events_for_day(user, day)?;
    let merged = merge_guarded(&current, &overrides, stamp)?;

    let mut written = 0;
    for event in &merged {
        let changed = current
            .iter()
            .find(|e| e.id == event.id)
            .map_or(true, |e| e.updated_at != event.updated_at);
        if changed {
            store.put(event.clone())?;
            written += 1;
        }
    }
    println!(
        "{} {} suggestion(s), {} event(s) updated",
        "Merged".green(),
        overrides.len(),
        written
    );

    // The optimizer is advisory, not a correctness oracle.
    let remaining = detect_conflicts(&store.events_for_day(user, day)?);
    if remaining.is_empty() {
        println!("{} No conflicts on {day}", "✓".green());
    } else {
        println!("{} conflict(s) remain on {day}:", remaining.len());
        print_conflicts(&remaining);
    }

    Ok(())
}
