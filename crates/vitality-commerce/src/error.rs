//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in catalog and storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The catalog failed validation at load time.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Query criteria that the engine refuses to evaluate.
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Malformed email address on a submission.
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// A required submission field was blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CommerceError>;
