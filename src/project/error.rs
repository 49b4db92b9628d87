//! Error types for document loading.

use thiserror::Error;

use crate::parser::{ErrorCode, ParseError};

/// A source could not be retrieved.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Reading a local file failed.
    #[error("Failed to read {location}: {error}")]
    Io {
        location: String,
        #[source]
        error: std::io::Error,
    },

    /// The server answered with a non-success status.
    #[error("Failed to load {location}: HTTP {status}")]
    Status { location: String, status: u16 },

    /// The HTTP request itself failed.
    #[cfg(feature = "http")]
    #[error("Failed to load {location}: {error}")]
    Http {
        location: String,
        #[source]
        error: reqwest::Error,
    },

    /// The HTTP client could not be built.
    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Any other transport failure, reported by a custom fetcher.
    #[error("Failed to load {location}: {message}")]
    Other { location: String, message: String },
}

impl RetrievalError {
    /// Create a failure for a custom fetcher.
    pub fn other(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// A batch load failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Called with no sources.
    #[error("load_all requires at least one source")]
    Usage,

    /// A source could not be retrieved.
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    /// A retrieved document did not parse.
    #[error("{location}: {error}")]
    Parse {
        location: String,
        #[source]
        error: ParseError,
    },
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Usage => ErrorCode::E0502,
            Self::Retrieval(_) => ErrorCode::E0501,
            Self::Parse { error, .. } => error.code(),
        }
    }
}
