//! Error types for the timeblock ecosystem.

use thiserror::Error;

/// Errors that can occur in scheduling operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid interval: start must be strictly before end")]
    InvalidInterval,

    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Invalid shorten factor {0}: must be strictly between 0 and 1")]
    InvalidFactor(f64),

    #[error("Shift would push the event past the end of its day")]
    WouldCrossDayBoundary,

    #[error("Invalid day '{0}': expected YYYY-MM-DD, \"today\" or \"tomorrow\"")]
    InvalidDay(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Stale write for event {0}: stored record is newer")]
    StaleWrite(String),

    #[error("Optimization result is stale: event set changed after the request was issued")]
    StaleOptimization,

    #[error("Optimizer error: {0}")]
    Optimizer(String),

    #[error("Optimizer '{0}' not found in PATH")]
    OptimizerNotInstalled(String),

    #[error("Optimizer request timed out after {0}s")]
    OptimizerTimeout(u64),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
