//! Error types for kintree.
//!
//! This module defines all error types used throughout the kintree crate,
//! providing path context for file failures and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for kintree operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Document Errors ===
    /// Failed to read the family tree document.
    #[error("failed to read family tree at {path}: {source}")]
    TreeRead {
        /// Path to the document file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The family tree document exists but is not valid JSON.
    #[error("failed to parse family tree at {path}: {source}")]
    TreeParse {
        /// Path to the document file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the family tree document back to disk.
    #[error("failed to write family tree at {path}: {source}")]
    TreeWrite {
        /// Path to the document file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kintree operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error means the document contained invalid JSON.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::TreeParse { .. })
    }

    /// Check if this error came from writing the document.
    #[must_use]
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::TreeWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::TreeRead {
            path: PathBuf::from("/data/family_tree.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/family_tree.json"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_tree_parse_error_display() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = Error::TreeParse {
            path: PathBuf::from("tree.json"),
            source: json_err,
        };
        assert!(err.to_string().contains("tree.json"));
        assert!(err.is_parse_error());
        assert!(!err.is_write_error());
    }

    #[test]
    fn test_tree_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::TreeWrite {
            path: PathBuf::from("tree.json"),
            source: io_err,
        };
        assert!(err.to_string().contains("disk full"));
        assert!(err.is_write_error());
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
