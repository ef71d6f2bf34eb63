//! Error types for CloudSigma normalization and transport

use thiserror::Error;

/// Errors raised while decoding a wire scalar into its domain form.
///
/// Missing fields and unknown enumeration tokens are never errors; only a
/// value that is present but malformed ends up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Timestamp not in `YYYY-MM-DDTHH:MM:SS+HH:MM` form
    #[error("Invalid timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },

    /// Size/amount that is not a non-negative integer
    #[error("Invalid magnitude: {0}")]
    Magnitude(String),

    /// Integer field outside the range of its domain type
    #[error("Invalid integer for {field}: {value}")]
    Integer { field: &'static str, value: String },

    /// Port or port range that cannot be parsed
    #[error("Invalid port specification: {0}")]
    Port(String),

    /// IP address or CIDR block that cannot be parsed
    #[error("Invalid address: {0}")]
    Address(String),

    /// Record does not match the wire schema
    #[error("Wire record decode error: {0}")]
    Json(String),
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}

/// Errors that can occur while talking to the CloudSigma API
#[derive(Debug, Error)]
pub enum CloudSigmaError {
    /// Request could not be sent or the response could not be read
    #[error("HTTP error: {0}")]
    Http(String),

    /// API answered with a non-success status
    #[error("CloudSigma API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body decoded, but normalization failed
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for CloudSigma operations
pub type CloudSigmaResult<T> = Result<T, CloudSigmaError>;

impl From<serde_json::Error> for CloudSigmaError {
    fn from(err: serde_json::Error) -> Self {
        CloudSigmaError::Serialization(err.to_string())
    }
}

impl CloudSigmaError {
    /// Whether the API reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CloudSigmaError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::Timestamp {
            value: "yesterday".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert!(err.to_string().contains("yesterday"));

        let err = DecodeError::Magnitude("12GB".to_string());
        assert_eq!(err.to_string(), "Invalid magnitude: 12GB");
    }

    #[test]
    fn test_decode_error_is_distinct_from_not_found() {
        let decode: CloudSigmaError = DecodeError::Port("http".to_string()).into();
        assert!(!decode.is_not_found());

        let missing = CloudSigmaError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(missing.is_not_found());
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode: DecodeError = err.into();
        assert!(matches!(decode, DecodeError::Json(_)));
    }
}
