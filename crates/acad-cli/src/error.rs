use crate::ClientError;

use acad_config::ConfigError;
use acad_core::CoreError;

use thiserror::Error;

/// Top-level error for the `acad` binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::Client(ClientError::from(err))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
