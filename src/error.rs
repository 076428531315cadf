//! Error types for the trail camera simulator
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! None of these errors are fatal to the menu state machine: a corrupt settings
//! file falls back to defaults, unknown buttons are ignored and failed writes are
//! logged while the in-memory state moves on.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the trail camera simulator
#[derive(Debug, Error)]
pub enum TrailCamError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Settings could not be written to the store
    #[error("Failed to persist settings: {0}")]
    PersistFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Input text that does not name a panel button
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for trail camera operations
pub type Result<T> = std::result::Result<T, TrailCamError>;

/// Convert an error to a user-friendly message
///
/// Used by the console front end when reporting problems to the operator.
pub fn get_user_friendly_error(error: &TrailCamError) -> String {
    match error {
        TrailCamError::ConfigError(_) => "Failed to load or save camera settings.\n\n\
             Your settings may not persist.\n\
             Check that the data directory is writable."
            .to_string(),
        TrailCamError::PersistFailed(e) => {
            format!(
                "Camera settings could not be saved:\n\n{e}\n\n\
                 The camera keeps running with the current settings \
                 and will retry on the next change."
            )
        }
        TrailCamError::UnknownButton(name) => {
            format!(
                "Unknown button: {name}\n\n\
                 Valid buttons are MODE, UP, DOWN, ENTER, RIGHT, POWER_ON and POWER_OFF."
            )
        }
        TrailCamError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        TrailCamError::JsonError(e) => {
            format!(
                "Settings file is corrupted:\n\n{e}\n\n\
                 The camera will use default settings."
            )
        }
    }
}
