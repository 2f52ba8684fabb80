use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use owo_colors::OwoColorize;
use timeblock_core::{detect_conflicts, Event, EventStore, EventType, Priority};

use crate::render::{print_conflicts, Render};
use crate::store::JsonStore;

pub struct AddArgs {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<i64>,
    pub event_type: String,
    pub priority: String,
    pub project: Option<String>,
}

pub fn run(store: &mut JsonStore, user: &str, args: AddArgs) -> Result<()> {
    let start = parse_datetime(&args.start)?;
    let end = match (&args.end, args.duration) {
        (Some(end), _) => parse_datetime(end)?,
        (None, Some(minutes)) => start + Duration::minutes(minutes),
        (None, None) => start + Duration::hours(1),
    };

    let mut event = Event::new(args.title, start, end, user)?
        .with_type(parse_type(&args.event_type)?)
        .with_priority(parse_priority(&args.priority)?);
    if let Some(project) = args.project {
        event = event.with_project(project);
    }

    let event = store.put(event)?;
    println!("{} {}", "Created".green(), event.render());

    // Creation is a mutation like any other: re-check the day.
    let day_events = store.events_for_day(user, event.date)?;
    let conflicts = detect_conflicts(&day_events);
    if !conflicts.is_empty() {
        println!();
        println!("{}:", "Conflicts".red());
        print_conflicts(&conflicts);
        println!(
            "{}",
            format!("Run `timeblock resolve <n> --day {}` to fix one.", event.date).dimmed()
        );
    }

    Ok(())
}

/// Parse "YYYY-MM-DDTHH:MM" (seconds optional) as a UTC instant.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(anyhow!(
        "Invalid date/time '{}'. Expected YYYY-MM-DDTHH:MM",
        s
    ))
}

fn parse_type(s: &str) -> Result<EventType> {
    match s {
        "meeting" => Ok(EventType::Meeting),
        "task" => Ok(EventType::Task),
        "break" => Ok(EventType::Break),
        "focus" => Ok(EventType::Focus),
        "other" => Ok(EventType::Other),
        _ => Err(anyhow!(
            "Unknown event type '{}'. Expected meeting, task, break, focus or other",
            s
        )),
    }
}

fn parse_priority(s: &str) -> Result<Priority> {
    match s {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        "critical" => Ok(Priority::Critical),
        _ => Err(anyhow!(
            "Unknown priority '{}'. Expected low, medium, high or critical",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_minute_precision() {
        let parsed = parse_datetime("2025-03-20T15:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_rejects_date_only() {
        assert!(parse_datetime("2025-03-20").is_err());
    }

    #[test]
    fn test_parse_type_and_priority() {
        assert_eq!(parse_type("focus").unwrap(), EventType::Focus);
        assert_eq!(parse_priority("critical").unwrap(), Priority::Critical);
        assert!(parse_type("party").is_err());
        assert!(parse_priority("urgent").is_err());
    }
}
