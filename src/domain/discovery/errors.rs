//! Errors raised while loading or validating reference catalogs.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reference data could not be loaded or is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate {kind} id '{id}' in catalog")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' has an empty {field}")]
    EmptyField {
        kind: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("Locality '{id}' has no postal code")]
    MissingPostalCode { id: String },

    /// The source returned data that could not be decoded.
    #[error("Malformed catalog data: {0}")]
    Malformed(String),

    /// The source could not be reached or read.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Unavailable(_) => ErrorCode::CatalogUnavailable,
            _ => ErrorCode::CatalogInvalid,
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CatalogInvalid => CatalogError::Malformed(err.message),
            _ => CatalogError::Unavailable(err.message),
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
