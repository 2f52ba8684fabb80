use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;
use timeblock_core::day::parse_day;
use timeblock_core::{
    detect_conflicts, resolve, EventStore, ScheduleError, Strategy,
};

use crate::render::{print_conflicts, Render};
use crate::store::JsonStore;

pub fn run(
    store: &mut JsonStore,
    user: &str,
    day: &str,
    index: usize,
    strategy: Option<&str>,
    auto: bool,
) -> Result<()> {
    let day = parse_day(day)?;

    let events = store.events_for_day(user, day)?;
    let conflicts = detect_conflicts(&events);
    if conflicts.is_empty() {
        println!("{} No conflicts on {day}", "✓".green());
        return Ok(());
    }

    let conflict = index
        .checked_sub(1)
        .and_then(|i| conflicts.get(i))
        .ok_or_else(|| {
            anyhow!(
                "No conflict #{index} on {day} ({} detected)",
                conflicts.len()
            )
        })?;

    let updated = if auto {
        // Auto policy: shift the later event past the overlap; if that
        // would cross midnight, push it to the next day instead.
        let minutes = conflict.overlap_minutes;
        match resolve(conflict, Strategy::ShiftLater { minutes }) {
            Err(ScheduleError::WouldCrossDayBoundary) => {
                println!(
                    "{}",
                    "Shift would cross midnight, moving to the next day instead.".dimmed()
                );
                resolve(conflict, Strategy::MoveToNextDay)?
            }
            other => other?,
        }
    } else {
        let strategy = strategy.ok_or_else(|| anyhow!("Pass --strategy or --auto"))?;
        resolve(conflict, parse_strategy(strategy)?)?
    };

    for event in &updated {
        let event = store.put(event.clone())?;
        println!("{} {}", "Updated".yellow(), event.render());
    }

    // A shift can introduce a fresh overlap with a third event, so the
    // detector runs again before claiming success.
    let remaining = detect_conflicts(&store.events_for_day(user, day)?);
    if remaining.is_empty() {
        println!("{} No conflicts remain on {day}", "✓".green());
    } else {
        println!();
        println!("{} conflict(s) still on {day}:", remaining.len());
        print_conflicts(&remaining);
    }

    Ok(())
}

/// Parse "shift:<minutes>", "next-day" or "shorten:<factor>".
fn parse_strategy(s: &str) -> Result<Strategy> {
    if let Some(minutes) = s.strip_prefix("shift:") {
        let minutes = minutes
            .parse()
            .map_err(|_| anyhow!("Invalid minutes in '{s}'"))?;
        return Ok(Strategy::ShiftLater { minutes });
    }
    if s == "next-day" {
        return Ok(Strategy::MoveToNextDay);
    }
    if let Some(factor) = s.strip_prefix("shorten:") {
        let factor = factor
            .parse()
            .map_err(|_| anyhow!("Invalid factor in '{s}'"))?;
        return Ok(Strategy::ShortenBoth { factor });
    }
    Err(anyhow!(
        "Unknown strategy '{s}'. Expected shift:<minutes>, next-day, or shorten:<factor>"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_variants() {
        assert_eq!(
            parse_strategy("shift:30").unwrap(),
            Strategy::ShiftLater { minutes: 30 }
        );
        assert_eq!(parse_strategy("next-day").unwrap(), Strategy::MoveToNextDay);
        assert_eq!(
            parse_strategy("shorten:0.8").unwrap(),
            Strategy::ShortenBoth { factor: 0.8 }
        );
    }

    #[test]
    fn test_parse_strategy_rejects_unknown() {
        assert!(parse_strategy("swap").is_err());
        assert!(parse_strategy("shift:soon").is_err());
        assert!(parse_strategy("shorten:most").is_err());
    }
}
