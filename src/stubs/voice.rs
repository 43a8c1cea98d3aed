use std::time::Duration;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};
use crate::domain::ProductId;
use super::{MockCollaborator, PendingSlot, StubError, StubOutcome};

const NAME: &str = "voice search";

/// Pretends to listen, then "hears" one of the canned voice commands, picked
/// uniformly at random.
#[derive(Debug)]
pub struct VoiceSearchStub {
    commands: Vec<String>,
    delay: Duration,
    pending: PendingSlot,
}

impl VoiceSearchStub {
    pub fn new(commands: Vec<String>, delay: Duration) -> Self {
        Self { commands, delay, pending: PendingSlot::default() }
    }
}

#[async_trait]
impl MockCollaborator for VoiceSearchStub {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(name = "voice_search", skip(self))]
    async fn request_mock_result(&self, _subject: Option<ProductId>) -> Result<StubOutcome, StubError> {
        let ticket = self.pending.begin(NAME)?;
        debug!("Listening");
        ticket.simulate_latency(self.delay, NAME).await?;
        let heard = self
            .commands
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(StubError::NoCandidates(NAME))?;
        debug!(transcript = %heard, "Heard voice command");
        Ok(StubOutcome::SearchTerm(heard))
    }

    fn cancel(&self) -> bool {
        self.pending.cancel()
    }

    fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }
}
