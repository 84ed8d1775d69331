//! # API Error Type
//!
//! What a caller sees when a conversion fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  convert(kind, input)                                                   │
//! │         │                                                               │
//! │         ├── Ok(words) ─────────────────────────────────► stdout         │
//! │         │                                                               │
//! │         └── Err(CoreError) ──► ApiError { status: 400, code, message }  │
//! │                                       │                                 │
//! │                                       ├── text: stderr line             │
//! │                                       └── json: stdout object           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every conversion failure is the caller's fault, so every one is a 400.
//! The code separates "bad input shape" from "number too large to name".

use longnumber_core::{CoreError, ErrorKind};
use serde::Serialize;

/// Status used for all conversion failures.
pub const BAD_REQUEST: u16 = 400;

/// API error reported for a failed conversion.
///
/// ## Serialization
/// ```json
/// {
///   "status": 400,
///   "code": "VALIDATION_ERROR",
///   "message": "currency_string: currency value needs to be in the form of -$0.00 (negative) or $0.00 (positive)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// HTTP-style status.
    pub status: u16,

    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed numeral or currency string
    ValidationError,

    /// Numeral too long, or scale index outside 11-1000
    OutOfRange,
}

impl ApiError {
    /// Creates a new 400 error.
    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            status: BAD_REQUEST,
            code,
            message: message.into(),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::Range => ErrorCode::OutOfRange,
            ErrorKind::Shape | ErrorKind::Format => ErrorCode::ValidationError,
        };
        ApiError::bad_request(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {:?}] {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_maps_to_validation() {
        let err = ApiError::from(CoreError::InvalidCurrency {
            field: "currency_string",
        });
        assert_eq!(err.status, 400);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("currency_string:"));
    }

    #[test]
    fn test_range_error_maps_to_out_of_range() {
        let err = ApiError::from(CoreError::ScaleOutOfRange {
            field: "scale",
            value: 1001,
            min: 11,
            max: 1000,
        });
        assert_eq!(err.status, 400);
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.message, "scale must be between 11-1000, got 1001");
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::from(CoreError::SegmentNotNumeric { field: "digits" });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["message"],
            "digits: segment must only contain numeric characters"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::bad_request(ErrorCode::OutOfRange, "too big");
        assert_eq!(err.to_string(), "[400 OutOfRange] too big");
    }
}
