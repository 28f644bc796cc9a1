use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid board column: {value} {location}")]
    InvalidBoardColumn {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task tag: {value} {location}")]
    InvalidTaskTag {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid lead status: {value} {location}")]
    InvalidLeadStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid {kind} status: {value} {location}")]
    InvalidStatus {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller's location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }

    /// True for errors raised by client-side form checks
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation { .. })
    }
}

pub type Result<T> = StdResult<T, CoreError>;
