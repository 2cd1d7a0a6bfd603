//! Scheduler error types

use thiserror::Error;

/// Learning rate scheduler errors
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Rejected constructor parameters. Raised before any rate is computed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A serialized scheduler description could not be parsed
    #[error("Failed to parse scheduler config: {0}")]
    Parse(String),
}

impl ScheduleError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

impl From<serde_yaml::Error> for ScheduleError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
