//! Application error types
//!
//! The trace generator itself cannot fail on valid input; everything here comes
//! from the layers around it (input, settings, terminal, logging).

use crate::input::InputError;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Unknown sample {index}: choose 1 to {count}")]
    UnknownSample { index: usize, count: usize },

    #[error("Settings error: {message}")]
    Settings { message: String },

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

impl Error {
    pub fn settings(message: impl Into<String>) -> Self {
        Error::Settings {
            message: message.into(),
        }
    }
}
