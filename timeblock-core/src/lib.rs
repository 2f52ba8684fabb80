//! Core scheduling types for the timeblock ecosystem.
//!
//! This crate provides the conflict pipeline the CLI is built on:
//! - `Event` and the interval math underneath it
//! - `detect_conflicts`, a sweep over one day's events that finds every
//!   pairwise overlap
//! - resolution strategies that rewrite events without touching storage
//! - merging of schedule optimizations computed by an external optimizer

pub mod conflict;
pub mod day;
pub mod error;
pub mod event;
pub mod interval;
pub mod merge;
pub mod optimizer;
pub mod protocol;
pub mod resolve;
pub mod store;

pub use conflict::{detect_conflicts, Conflict};
pub use error::{ScheduleError, ScheduleResult};
pub use event::{Event, EventType, Priority};
pub use interval::Interval;
pub use merge::{merge_overrides, EventOverride, EventPatch};
pub use resolve::{resolve, Strategy};
pub use store::{EventStore, MemoryStore};
