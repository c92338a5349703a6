//! Catalog error types.

use crate::product::ProductId;
use thiserror::Error;

/// Errors raised while validating catalog content.
///
/// Cart operations never fail; the only errors in this crate come from
/// wiring bad content into a [`Catalog`](crate::catalog::Catalog), which
/// should surface loudly at startup rather than at interaction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has a negative price.
    #[error("negative price for product {0}")]
    NegativePrice(ProductId),
}
