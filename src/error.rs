//! # Centralized Error Handling
//!
//! Only structural problems surface as errors: an empty identifier collection
//! handed to the resolver, or asking the resolved mapping for an identifier it
//! does not hold. Secrets that cannot be found in the environment or on disk
//! are not errors; they are logged and left out of the result.

use thiserror::Error;

/// Error type shared by the resolver and the accessor layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SecretsError {
    /// The identifier collection was empty.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The identifier is not present in the resolved mapping.
    #[error("secret {0} does not exist")]
    NotFound(String),
}

/// Convenience Result type alias that uses SecretsError as the error type.
pub type SecretsResult<T> = Result<T, SecretsError>;
