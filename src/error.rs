//! Error types for result materialization.

use std::panic::Location;
use thiserror::Error;

use crate::protocol::types::SemanticType;

/// Result type alias for materialization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for decoding and assembling result sets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Text field is not a valid literal for the column's numeric type.
    #[error("Malformed numeric field {value:?} for {target}")]
    MalformedNumericField { value: String, target: SemanticType },

    /// Text field does not match the configured date format.
    #[error("Malformed date field {value:?} (expected format {format:?})")]
    MalformedDateField { value: String, format: String },

    /// Text field does not match the configured date-time format.
    #[error("Malformed date-time field {value:?} (expected format {format:?})")]
    MalformedDateTimeField { value: String, format: String },

    /// Text field is not a valid `[-]H:MM:SS[.ffffff]` time.
    #[error("Malformed time field {value:?}")]
    MalformedTimeField { value: String },

    /// The native layer refused the column binding layout.
    #[error("Column bindings rejected: {reason}")]
    BindRejected { reason: String },

    /// Fetched row count disagrees with the row-count hint.
    #[error("Row count mismatch: expected {expected} rows, fetched {actual}")]
    RowCountMismatch { expected: u64, actual: u64 },

    /// Fetched row does not carry one field per column.
    #[error("Column count mismatch: expected {expected} fields, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Native layer wrote more bytes than the binding can hold.
    #[error("Data truncated in column {column}: need {needed} bytes, buffer holds {capacity}")]
    DataTruncated {
        column: String,
        needed: usize,
        capacity: usize,
    },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// Error reported by the native client layer.
    #[error("Native client error {code}: {message}")]
    Native { code: u32, message: String },

    /// Column not found.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },
}

impl Error {
    /// Create a native client error.
    pub fn native(code: u32, message: impl Into<String>) -> Self {
        Self::Native {
            code,
            message: message.into(),
        }
    }

    /// Create a bind rejection error.
    pub fn bind_rejected(reason: impl Into<String>) -> Self {
        Self::BindRejected {
            reason: reason.into(),
        }
    }

    /// Whether this error is local to a single field value.
    ///
    /// Field-local errors are the ones a [`FieldErrorPolicy`](crate::FieldErrorPolicy)
    /// may replace with NULL.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedNumericField { .. }
                | Error::MalformedDateField { .. }
                | Error::MalformedDateTimeField { .. }
                | Error::MalformedTimeField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_classification() {
        let err = Error::MalformedNumericField {
            value: "12x".to_string(),
            target: SemanticType::Int32,
        };
        assert!(err.is_field_error());
        assert!(!Error::bind_rejected("width mismatch").is_field_error());
        assert!(!Error::RowCountMismatch {
            expected: 3,
            actual: 2
        }
        .is_field_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::MalformedNumericField {
            value: "12x".to_string(),
            target: SemanticType::Int32,
        };
        assert_eq!(err.to_string(), "Malformed numeric field \"12x\" for INT32");

        let err = Error::native(2013, "Lost connection");
        assert_eq!(err.to_string(), "Native client error 2013: Lost connection");
    }
}
