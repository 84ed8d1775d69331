//! # Error Types
//!
//! Domain-specific error types for longnumber-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  longnumber-core errors (this file)                                     │
//! │  └── CoreError                                                          │
//! │      ├── ScaleOutOfRange    (Range)  - scale index outside 11-1000      │
//! │      ├── SegmentLength      (Shape)  - digit group not 1-3 chars        │
//! │      ├── SegmentNotNumeric  (Shape)  - digit group has a non-digit      │
//! │      └── InvalidCurrency    (Format) - currency string rejected         │
//! │                                                                         │
//! │  longnumber-cli errors (in app)                                         │
//! │  └── ApiError         - What the caller sees (status 400 + message)     │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → stdout/stderr                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant names the parameter it rejected. Nothing here is retried
//! or recovered inside the core; errors go straight back to the caller.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while converting numerals to words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A scale index was outside what the Conway-Wechsler generator names.
    ///
    /// ## When This Occurs
    /// - Direct calls to [`scale_name`](crate::conway_wechsler::scale_name) with
    ///   an index below 11 or above 1000
    /// - A non-zero digit group sitting more than 1000 groups from the right
    ///   (numerals longer than [`MAX_DIGITS`](crate::MAX_DIGITS))
    #[error("{field} must be between {min}-{max}, got {value}")]
    ScaleOutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// A digit group was empty or longer than three characters.
    #[error("{field}: segment must only contain one to three characters, got {len}")]
    SegmentLength { field: &'static str, len: usize },

    /// A digit group contained something other than `0`-`9`.
    #[error("{field}: segment must only contain numeric characters")]
    SegmentNotNumeric { field: &'static str },

    /// The currency string did not match the accepted shape.
    ///
    /// Deliberately coarse: the message does not say which rule failed.
    #[error("{field}: currency value needs to be in the form of -$0.00 (negative) or $0.00 (positive)")]
    InvalidCurrency { field: &'static str },
}

impl CoreError {
    /// Classifies the error for callers that map it to a response.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ScaleOutOfRange { .. } => ErrorKind::Range,
            CoreError::SegmentLength { .. } | CoreError::SegmentNotNumeric { .. } => {
                ErrorKind::Shape
            }
            CoreError::InvalidCurrency { .. } => ErrorKind::Format,
        }
    }

    /// Name of the parameter the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            CoreError::ScaleOutOfRange { field, .. }
            | CoreError::SegmentLength { field, .. }
            | CoreError::SegmentNotNumeric { field }
            | CoreError::InvalidCurrency { field } => field,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Scale index outside the generator's bounds.
    Range,
    /// Malformed digit group reaching the decomposition layer.
    Shape,
    /// Currency string failing the pattern.
    Format,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Range => write!(f, "range"),
            ErrorKind::Shape => write!(f, "shape"),
            ErrorKind::Format => write!(f, "format"),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ScaleOutOfRange {
            field: "scale",
            value: 1001,
            min: 11,
            max: 1000,
        };
        assert_eq!(err.to_string(), "scale must be between 11-1000, got 1001");

        let err = CoreError::SegmentLength {
            field: "digits",
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "digits: segment must only contain one to three characters, got 4"
        );

        let err = CoreError::SegmentNotNumeric { field: "digits" };
        assert_eq!(
            err.to_string(),
            "digits: segment must only contain numeric characters"
        );
    }

    #[test]
    fn test_currency_message_names_parameter() {
        let err = CoreError::InvalidCurrency {
            field: "currency_string",
        };
        assert!(err.to_string().starts_with("currency_string:"));
        assert!(err.to_string().contains("-$0.00"));
        assert_eq!(err.field(), "currency_string");
    }

    #[test]
    fn test_kind_classification() {
        let range = CoreError::ScaleOutOfRange {
            field: "scale",
            value: 3,
            min: 11,
            max: 1000,
        };
        assert_eq!(range.kind(), ErrorKind::Range);
        assert_eq!(
            CoreError::SegmentLength { field: "digits", len: 0 }.kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            CoreError::SegmentNotNumeric { field: "digits" }.kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            CoreError::InvalidCurrency { field: "currency_string" }.kind(),
            ErrorKind::Format
        );
        assert_eq!(ErrorKind::Format.to_string(), "format");
    }
}
