//! Error types for litdoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for litdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting literate sources.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing, unreadable, or not valid UTF-8.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file or one of its parent directories cannot be written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Neither source pairs nor a configuration file were provided.
    #[error("At least one source or a config file must be provided.")]
    ConfigurationMissing,

    /// A source pair cannot be resolved into conversion jobs.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// The configuration file is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Coarse classification of an [`Error`], recorded in batch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Write,
    ConfigurationMissing,
    InvalidSource,
    Config,
    Render,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Read => "read error",
            ErrorKind::Write => "write error",
            ErrorKind::ConfigurationMissing => "configuration missing",
            ErrorKind::InvalidSource => "invalid source",
            ErrorKind::Config => "configuration error",
            ErrorKind::Render => "render error",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Read { .. } => ErrorKind::Read,
            Error::Write { .. } => ErrorKind::Write,
            Error::ConfigurationMissing => ErrorKind::ConfigurationMissing,
            Error::InvalidSource(_) => ErrorKind::InvalidSource,
            Error::Config(_) => ErrorKind::Config,
            Error::Render(_) => ErrorKind::Render,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}
