//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures.
/// Infrastructure concerns belong elsewhere. Invalid allocation attempts
/// (wrong sku, insufficient quantity) are not errors at the batch level -
/// they are boolean rejections via `can_allocate`; only the cross-batch
/// selection can fail outright.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No candidate batch can satisfy an order line.
    #[error("out of stock for sku {0}")]
    OutOfStock(String),
}

impl DomainError {
    pub fn out_of_stock(sku: impl Into<String>) -> Self {
        Self::OutOfStock(sku.into())
    }
}

