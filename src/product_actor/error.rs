use thiserror::Error;
use crate::domain::ProductId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Product out of stock: {0}")]
    OutOfStock(String),
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
