//! Optimizer protocol types.
//!
//! Defines the JSON protocol used for communication between timeblock and
//! optimizer binaries over stdin/stdout.

use serde::{Deserialize, Serialize};

use crate::event::{Event, Priority};
use crate::merge::EventOverride;

/// An unscheduled piece of work the optimizer may place on the calendar.
/// Carried opaquely; the core never schedules tasks itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub duration_minutes: i64,
    pub priority: Priority,
}

/// User scheduling preferences, forwarded to the optimizer untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Hour of day the working window opens (0-23).
    pub working_hours_start: u32,
    /// Hour of day the working window closes (0-23).
    pub working_hours_end: u32,
    /// Whether the optimizer should keep focus blocks contiguous.
    #[serde(default)]
    pub protect_focus_blocks: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            working_hours_start: 9,
            working_hours_end: 17,
            protect_focus_blocks: false,
        }
    }
}

/// Request sent to an optimizer on stdin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub events: Vec<Event>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Response received from an optimizer on stdout.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Convenience alias for the payload optimizers return.
pub type OptimizeResponse = Vec<EventOverride>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_response_roundtrip() {
        let json = Response::success(vec![1, 2, 3]);
        let parsed: Response<Vec<i32>> = serde_json::from_str(&json).unwrap();

        match parsed {
            Response::Success { data } => assert_eq!(data, vec![1, 2, 3]),
            Response::Error { error } => panic!("unexpected error: {error}"),
        }
    }

    #[test]
    fn test_error_response_roundtrip() {
        let json = Response::error("no solution");
        let parsed: Response<Vec<i32>> = serde_json::from_str(&json).unwrap();

        assert!(matches!(parsed, Response::Error { error } if error == "no solution"));
    }

    #[test]
    fn test_override_deserializes_flattened_fields() {
        let json = r#"{"id": "evt-1", "startTime": "2025-03-20T11:00:00Z", "endTime": "2025-03-20T11:30:00Z"}"#;
        let parsed: EventOverride = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.id, "evt-1");
        assert!(parsed.patch.start_time.is_some());
        assert!(parsed.patch.title.is_none());
    }
}
