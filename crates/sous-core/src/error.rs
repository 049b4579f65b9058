//! Error types for the sous library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all sous operations.
#[derive(Error, Debug)]
pub enum SousError {
    /// The generative text endpoint could not produce a usable result
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Failures talking to the generative text endpoint.
///
/// The three variants map one-to-one onto the user-facing failure classes:
/// the request never completed, the endpoint answered with a non-success
/// status, or the answer could not be turned into the requested payload.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a non-2xx status
    #[error("API request failed with status {status}")]
    Status { status: u16, body: String },
    /// The envelope or the payload inside it did not match what was asked for
    #[error("Unparsable response: {reason}")]
    UnparsableResponse { reason: String },
}

impl FetchError {
    /// Creates an unparsable-response error with the given reason.
    pub fn unparsable(reason: impl Into<String>) -> Self {
        FetchError::UnparsableResponse {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    /// Drops the request URL, which carries the API key.
    fn from(source: reqwest::Error) -> Self {
        FetchError::Transport {
            source: source.without_url(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SousError {
        SousError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SousError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Human readable reason for input errors, falling back to the full
    /// message for everything else. Used for inline form messages.
    pub fn reason(&self) -> String {
        match self {
            SousError::InvalidInput { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for sous operations
pub type Result<T> = std::result::Result<T, SousError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = SousError::invalid_input("ingredients").with_reason("Please add at least one ingredient");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'ingredients': Please add at least one ingredient"
        );
        assert_eq!(err.reason(), "Please add at least one ingredient");
    }

    #[test]
    fn test_fetch_error_wraps_transparently() {
        let err: SousError = FetchError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "API request failed with status 503");
    }
}
