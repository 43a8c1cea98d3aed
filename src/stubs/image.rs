use std::time::Duration;
use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::domain::ProductId;
use super::{MockCollaborator, PendingSlot, StubError, StubOutcome};

const NAME: &str = "image search";

pub const DEFAULT_IMAGE_MATCH: &str = "wireless headphones";

/// Pretends to analyze an uploaded photo; always "recognizes" the same thing.
#[derive(Debug)]
pub struct ImageSearchStub {
    detected: String,
    delay: Duration,
    pending: PendingSlot,
}

impl ImageSearchStub {
    pub fn new(delay: Duration) -> Self {
        Self { detected: DEFAULT_IMAGE_MATCH.to_string(), delay, pending: PendingSlot::default() }
    }
}

#[async_trait]
impl MockCollaborator for ImageSearchStub {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(name = "image_search", skip(self))]
    async fn request_mock_result(&self, _subject: Option<ProductId>) -> Result<StubOutcome, StubError> {
        let ticket = self.pending.begin(NAME)?;
        debug!("Analyzing image");
        ticket.simulate_latency(self.delay, NAME).await?;
        Ok(StubOutcome::SearchTerm(self.detected.clone()))
    }

    fn cancel(&self) -> bool {
        self.pending.cancel()
    }

    fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }
}
