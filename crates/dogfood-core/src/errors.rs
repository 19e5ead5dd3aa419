//! Logic errors.

use thiserror::Error;

/// Logic error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`dogfood_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: dogfood_ghapi_interface::ApiError,
    },
}

impl From<dogfood_ghapi_interface::ApiError> for DomainError {
    fn from(e: dogfood_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
