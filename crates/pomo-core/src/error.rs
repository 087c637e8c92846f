//! Core error types for pomo-core.
//!
//! Interval operations share a single closed taxonomy so callers can branch
//! on the variant rather than comparing messages.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The repository holds no intervals yet.
    #[error("No intervals")]
    NoIntervals,

    /// Pause was requested on an interval that is not running.
    #[error("Interval not running")]
    IntervalNotRunning,

    /// Start was requested on a Done or Cancelled interval.
    #[error("Interval is completed or cancelled: cannot start")]
    IntervalCompleted,

    /// A stored state code does not map to any known state.
    #[error("Invalid state: {0}")]
    InvalidState(i64),

    /// A repository operation was given an id below 1 or an unknown id.
    #[error("Invalid ID: {0}")]
    InvalidId(i64),

    /// A repository lock was poisoned by a panicking writer.
    #[error("Repository lock poisoned")]
    LockPoisoned,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

impl<T> From<std::sync::PoisonError<T>> for CoreError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoreError::LockPoisoned
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
