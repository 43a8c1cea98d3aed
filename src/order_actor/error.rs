use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Transition rejected: {0}")]
    TransitionRejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
