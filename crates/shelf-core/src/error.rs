//! Error types for Shelf core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages. All variants are recoverable: none should
//! abort the running process.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// A book field failed its constraint on `add`. The collection is
    /// never mutated when this is returned.
    #[error("Validation error: {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description of the violated constraint
        reason: String,
    },

    /// A stale or invalid position was passed to `remove` or
    /// `toggle_read_status`. Positions are not stable identities and
    /// must be re-checked against the live sequence on every call.
    #[error("Index {index} is out of range (library has {len} books)")]
    IndexOutOfRange {
        /// The rejected position
        index: usize,
        /// Length of the sequence at the time of the call
        len: usize,
    },

    /// Reading or writing the library file failed, or the persisted
    /// data is malformed. On load the caller should degrade to an empty
    /// library; on persist the in-memory state remains the working copy.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Storage(format!("malformed library data: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = ShelfError::Validation {
            field: "title",
            reason: "must not be empty".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("title"));
        assert!(message.contains("must not be empty"));
    }

    #[test]
    fn test_index_error_reports_bounds() {
        let err = ShelfError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 is out of range (library has 3 books)"
        );
    }

    #[test]
    fn test_json_error_maps_to_storage() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = ShelfError::from(parse_err);
        assert!(matches!(err, ShelfError::Storage(_)));
    }
}
