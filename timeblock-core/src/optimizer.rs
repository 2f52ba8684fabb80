//! External optimizer subprocess.
//!
//! An optimizer is any binary named `timeblock-optimizer-<name>` on PATH
//! that reads one `OptimizeRequest` as JSON on stdin and writes a
//! `Response` carrying per-event field overrides on stdout. The protocol
//! is language-agnostic: anything that speaks it can optimize a schedule.
//!
//! The core never applies a result implicitly. Callers capture a version
//! stamp when issuing the request and merge through `merge_guarded`, so a
//! late-arriving result for a superseded event set is discarded instead of
//! applied.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;
use crate::merge::{merge_overrides, EventOverride};
use crate::protocol::{OptimizeRequest, Response};

const OPTIMIZER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Optimizer(String);

impl Optimizer {
    pub fn from_name(name: &str) -> Self {
        Optimizer(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> ScheduleResult<std::path::PathBuf> {
        let binary_name = format!("timeblock-optimizer-{}", self.0);
        which::which(&binary_name)
            .map_err(|_| ScheduleError::OptimizerNotInstalled(binary_name))
    }

    /// Send the request and collect the suggested overrides, bounded by a
    /// timeout. No event is mutated here; merging is the caller's move.
    pub async fn optimize(&self, request: &OptimizeRequest) -> ScheduleResult<Vec<EventOverride>> {
        timeout(OPTIMIZER_TIMEOUT, self.call(request))
            .await
            .map_err(|_| ScheduleError::OptimizerTimeout(OPTIMIZER_TIMEOUT.as_secs()))?
    }

    async fn call(&self, request: &OptimizeRequest) -> ScheduleResult<Vec<EventOverride>> {
        let request_json = serde_json::to_string(request)
            .map_err(|e| ScheduleError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = Command::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            // The timeout in `optimize` drops this future; the child must
            // die with it rather than leak.
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ScheduleError::Optimizer(format!(
                    "Failed to spawn {}: {}",
                    binary_path.display(),
                    e
                ))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(ScheduleError::Optimizer(format!(
                "optimizer exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let response: Response<Vec<EventOverride>> = serde_json::from_str(stdout.trim())
            .map_err(|e| ScheduleError::Optimizer(format!("Invalid optimizer response: {e}")))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(ScheduleError::Optimizer(error)),
        }
    }
}

/// The version stamp of an event set: the latest `updated_at` it carries.
/// Captured when an optimize request is issued and compared before merging.
pub fn version_stamp(events: &[Event]) -> Option<DateTime<Utc>> {
    events.iter().map(|e| e.updated_at).max()
}

/// Merge an optimizer response, unless the event set changed since the
/// request was issued.
pub fn merge_guarded(
    events: &[Event],
    overrides: &[EventOverride],
    stamp_at_request: Option<DateTime<Utc>>,
) -> ScheduleResult<Vec<Event>> {
    if version_stamp(events) != stamp_at_request {
        debug!("discarding optimization computed against a superseded event set");
        return Err(ScheduleError::StaleOptimization);
    }
    merge_overrides(events, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::EventPatch;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, hour, min, 0).unwrap()
    }

    fn fixture() -> Vec<Event> {
        vec![
            Event::new("Standup", at(9, 0), at(9, 15), "user-1").unwrap(),
            Event::new("Planning", at(10, 0), at(11, 0), "user-1").unwrap(),
        ]
    }

    #[test]
    fn test_version_stamp_is_latest_updated_at() {
        let mut events = fixture();
        events[1].touch();

        assert_eq!(version_stamp(&events), Some(events[1].updated_at));
        assert_eq!(version_stamp(&[]), None);
    }

    #[test]
    fn test_guarded_merge_applies_when_stamp_matches() {
        let events = fixture();
        let stamp = version_stamp(&events);
        let overrides = vec![EventOverride {
            id: events[0].id.clone(),
            patch: EventPatch {
                start_time: Some(at(11, 0)),
                end_time: Some(at(11, 30)),
                ..Default::default()
            },
        }];

        let merged = merge_guarded(&events, &overrides, stamp).unwrap();

        assert_eq!(merged[0].start_time, at(11, 0));
    }

    #[tokio::test]
    async fn test_unknown_optimizer_binary_errors() {
        let optimizer = Optimizer::from_name("no-such-optimizer");
        let request = OptimizeRequest {
            events: fixture(),
            tasks: Vec::new(),
            preferences: crate::protocol::Preferences::default(),
        };

        let result = optimizer.optimize(&request).await;

        assert!(matches!(
            result,
            Err(ScheduleError::OptimizerNotInstalled(_))
        ));
    }

    #[test]
    fn test_guarded_merge_discards_stale_result() {
        let mut events = fixture();
        let stamp = version_stamp(&events);

        // The set moves on while the optimizer is thinking.
        events[0].updated_at = stamp.unwrap() + chrono::Duration::seconds(1);

        let result = merge_guarded(&events, &[], stamp);

        assert!(matches!(result, Err(ScheduleError::StaleOptimization)));
    }
}
