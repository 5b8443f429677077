//! Error types for reStructuredText generation.
//!
//! This module provides [`RenderError`], the primary error type for all
//! rendering operations. Errors are explicit failure results; no error path
//! is used for normal control flow, and valid-but-empty output (such as the
//! degenerate zero-row table) is never reported as an error.

use std::fmt;

/// Error type for rendering operations.
///
/// All fallible public functions in this crate return this type.
#[derive(Debug)]
pub enum RenderError {
    /// A row's cell count differs from the table's header count.
    RowShape {
        /// Zero-based index of the offending row.
        row: usize,
        /// Cell count implied by the headers.
        expected: usize,
        /// Cell count actually supplied.
        found: usize,
    },

    /// Section header level outside the supported range of 1 through 6.
    InvalidLevel(usize),

    /// A column name is missing from a serialized record.
    MissingField {
        /// Zero-based index of the offending record.
        row: usize,
        /// The column name that was not found.
        field: String,
    },

    /// Record serialization error.
    SerializationError(String),

    /// I/O error (e.g. writing a header to a stream).
    IoError(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RowShape {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            RenderError::InvalidLevel(level) => write!(f, "invalid header level: {}", level),
            RenderError::MissingField { row, field } => {
                write!(f, "record {} has no field '{}'", row, field)
            }
            RenderError::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            RenderError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_shape_display() {
        let err = RenderError::RowShape {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "row 2 has 1 cells, expected 3");
    }

    #[test]
    fn test_invalid_level_display() {
        let err = RenderError::InvalidLevel(7);
        assert!(err.to_string().contains("invalid header level"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_missing_field_display() {
        let err = RenderError::MissingField {
            row: 0,
            field: "name".to_string(),
        };
        assert!(err.to_string().contains("'name'"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::IoError(_)));
    }
}
