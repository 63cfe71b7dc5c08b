use thiserror::Error;

use super::{ConfigError, HttpError, SinkError, StorageError, ValidationError};

/// Exit code for usage, validation and configuration failures.
const EXIT_USAGE: u8 = 2;
/// Exit code when the results file could not be written.
const EXIT_OUTPUT: u8 = 3;
/// Exit code when the results file could not be uploaded.
const EXIT_UPLOAD: u8 = 4;
/// Exit code for every other failure.
const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    pub fn sink<E>(error: E) -> Self
    where
        E: Into<SinkError>,
    {
        error.into().into()
    }

    pub fn storage<E>(error: E) -> Self
    where
        E: Into<StorageError>,
    {
        error.into().into()
    }

    /// Process exit code reported for this failure kind.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Clap { .. } | Self::Validation(_) | Self::Config(_) => EXIT_USAGE,
            Self::Sink(_) => EXIT_OUTPUT,
            Self::Storage(_) => EXIT_UPLOAD,
            Self::Io { .. } | Self::Http(_) => EXIT_FAILURE,
        }
    }
}
