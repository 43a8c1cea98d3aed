use thiserror::Error;
use crate::order_actor::OrderError;
use crate::product_actor::CatalogError;
use crate::stubs::StubError;

/// Errors that can occur while handling a session input event.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Stub(#[from] StubError),
    #[error("Category index {index} out of range for {count} categories")]
    CategoryOutOfRange { index: usize, count: usize },
    #[error("{0} returned an unexpected result")]
    UnexpectedOutcome(&'static str),
    #[error("Event receiver closed")]
    EventsClosed,
}
