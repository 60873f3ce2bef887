//! Domain error types
//!
//! These errors are raised by the catalog operations and are never caught
//! internally: a malformed code is a caller defect, not a transient failure.

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A class code segment could not be read as an integer
    #[error("Malformed class code '{code}': segment '{segment}' is not an integer")]
    MalformedClassCode { code: String, segment: String },

    /// A code could not be read as a single decimal number
    #[error("Invalid numeric code '{code}': not a decimal number")]
    InvalidNumericCode { code: String },

    /// Record field validation error with message
    #[error("Validation error: {0}")]
    Validation(String),

    /// Import payload could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    pub(crate) fn malformed(code: &str, segment: &str) -> Self {
        CatalogError::MalformedClassCode {
            code: code.to_string(),
            segment: segment.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
