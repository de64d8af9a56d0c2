use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    /// A tick arrived before [`start_session`](crate::TrackingController::start_session).
    #[error("tracking session not started")]
    NotStarted,
    /// Thresholds supplied at session start are out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, TrackerError>;
