//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured registry URL is unusable.
    #[error("Invalid registry URL: {0}")]
    InvalidRegistryUrl(String),
}

/// Failures of the TLD list subsystem.
#[derive(Error, Debug)]
pub enum TldError {
    /// The registry could not be reached (timeout, connection failure,
    /// interrupted body).
    #[error("Network error fetching {url}: {source}")]
    Network {
        /// Registry URL
        url: String,
        /// Underlying transport error
        #[source]
        source: ReqwestError,
    },

    /// The registry answered with a non-success status.
    #[error("HTTP status error fetching {url}: {status}")]
    HttpStatus {
        /// Registry URL
        url: String,
        /// Status returned by the registry
        status: StatusCode,
    },

    /// A punycode label could not be decoded.
    #[error("Failed to decode internationalized label '{label}'")]
    Decode {
        /// The lowercase label that failed to decode
        label: String,
    },

    /// No cache file exists yet.
    #[error("TLD cache not found at {}", .path.display())]
    NotFound {
        /// Expected cache file location
        path: PathBuf,
    },

    /// Any other file-system failure on the cache.
    #[error("TLD cache I/O error at {}: {source}", .path.display())]
    Io {
        /// File or directory the operation failed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Kind of a `TldError`, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TldErrorKind {
    /// See `TldError::Network`
    Network,
    /// See `TldError::HttpStatus`
    HttpStatus,
    /// See `TldError::Decode`
    Decode,
    /// See `TldError::NotFound`
    NotFound,
    /// See `TldError::Io`
    Io,
}

impl TldError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> TldErrorKind {
        match self {
            TldError::Network { .. } => TldErrorKind::Network,
            TldError::HttpStatus { .. } => TldErrorKind::HttpStatus,
            TldError::Decode { .. } => TldErrorKind::Decode,
            TldError::NotFound { .. } => TldErrorKind::NotFound,
            TldError::Io { .. } => TldErrorKind::Io,
        }
    }

    /// Builds the cache error for an I/O failure, keeping absence distinct.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            TldError::NotFound { path }
        } else {
            TldError::Io { path, source }
        }
    }
}

impl std::fmt::Display for TldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TldErrorKind {
    /// Returns a human-readable name for the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TldErrorKind::Network => "Network error",
            TldErrorKind::HttpStatus => "HTTP status error",
            TldErrorKind::Decode => "Decode error",
            TldErrorKind::NotFound => "Not found",
            TldErrorKind::Io => "I/O error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(TldErrorKind::HttpStatus.as_str(), "HTTP status error");
        assert_eq!(TldErrorKind::Decode.to_string(), "Decode error");
    }

    #[test]
    fn test_error_kind_strings_are_unique() {
        let names: std::collections::HashSet<&str> =
            TldErrorKind::iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), TldErrorKind::iter().count());
    }

    #[test]
    fn test_from_io_keeps_not_found_distinct() {
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = TldError::from_io("/tmp/tlds.txt", missing);
        assert_eq!(err.kind(), TldErrorKind::NotFound);
        assert!(err.to_string().contains("/tmp/tlds.txt"));

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = TldError::from_io("/tmp/tlds.txt", denied);
        assert_eq!(err.kind(), TldErrorKind::Io);
    }

    #[test]
    fn test_http_status_message() {
        let err = TldError::HttpStatus {
            url: "https://example.test/tlds.txt".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = err.to_string();
        assert!(msg.contains("500"), "got: {}", msg);
        assert!(msg.contains("https://example.test/tlds.txt"));
    }
}
