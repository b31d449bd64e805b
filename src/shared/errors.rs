use thiserror::Error;

use crate::domain::product::ProductId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Product with given id: ({0}) not found.")]
    ProductNotFound(ProductId),

    #[error("Product with given name: ({0}) already exists.")]
    ProductAlreadyExists(String),

    #[error("Negative quantity of product was given.")]
    NegativeQuantity,

    #[error("Illegal product price was given.")]
    IllegalPrice,

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
