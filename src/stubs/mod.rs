//! # Stub collaborators
//!
//! Voice, image and AR stand-ins. Each one waits out a fixed latency and then
//! resolves to a canned value; none of them looks at real audio, pixels or
//! geometry. They share the [`MockCollaborator`] trait so the session can be
//! driven by test doubles.
//!
//! Every stub admits one outstanding request. A second request while the first
//! is still latent fails with [`StubError::AlreadyPending`], and the pending
//! request can be cancelled from any task holding the stub.

mod latency;
pub mod voice;
pub mod image;
pub mod ar;

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::ProductId;

pub use latency::PendingSlot;
pub use voice::VoiceSearchStub;
pub use image::ImageSearchStub;
pub use ar::{ArPreviewStub, ArViewport};

/// What a stub resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum StubOutcome {
    SearchTerm(String),
    Product(ProductId),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StubError {
    #[error("{0} already has a request in flight")]
    AlreadyPending(&'static str),
    #[error("{0} request cancelled")]
    Cancelled(&'static str),
    #[error("{0} needs a product to work on")]
    MissingSubject(&'static str),
    #[error("{0} has no canned results")]
    NoCandidates(&'static str),
}

#[async_trait]
pub trait MockCollaborator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Resolves after the stub's latency. `subject` is the product the request
    /// is about, when the stub needs one.
    async fn request_mock_result(&self, subject: Option<ProductId>) -> Result<StubOutcome, StubError>;

    /// Cancels the request in flight. Returns whether one was pending.
    fn cancel(&self) -> bool;

    fn is_pending(&self) -> bool;
}
