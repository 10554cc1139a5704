//! Error types for vector scoring
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Two failure classes exist and they propagate differently:
//! - configuration errors are raised once, at query setup, and fail the query;
//! - data-format errors are raised per document and are recovered locally
//!   (the document scores 0.0, the query continues).

use thiserror::Error;

/// Result type alias for vector scoring operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the vector scoring engine
#[derive(Debug, Error)]
pub enum Error {
    /// Required query parameter is missing or empty
    #[error("missing required parameter: {name}")]
    MissingParam {
        /// Parameter name as it appears in the request
        name: &'static str,
    },

    /// Query parameter is present but invalid
    #[error("invalid parameter {name}: {reason}")]
    InvalidParam {
        /// Parameter name as it appears in the request
        name: &'static str,
        /// Reason why it's invalid
        reason: String,
    },

    /// Stored vector field content could not be parsed for one document
    #[error("malformed vector field {field:?}: {reason}")]
    MalformedField {
        /// Name of the stored field
        field: String,
        /// Reason why parsing failed
        reason: String,
    },
}

impl Error {
    /// Check if this error is fatal to the query (raised at setup time)
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingParam { .. } | Error::InvalidParam { .. }
        )
    }

    /// Check if this error is a per-document data-format error
    ///
    /// These are recovered locally: the document scores 0.0 and the
    /// query completes normally.
    pub fn is_data_format(&self) -> bool {
        matches!(self, Error::MalformedField { .. })
    }
}
