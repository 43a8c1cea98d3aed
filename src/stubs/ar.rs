use std::time::Duration;
use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::domain::ProductId;
use super::{MockCollaborator, PendingSlot, StubError, StubOutcome};

const NAME: &str = "AR preview";

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;

/// Pretends to place a product in the room. Resolves to the product it was
/// asked about once the rotation delay has passed.
#[derive(Debug)]
pub struct ArPreviewStub {
    delay: Duration,
    pending: PendingSlot,
}

impl ArPreviewStub {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: PendingSlot::default() }
    }
}

#[async_trait]
impl MockCollaborator for ArPreviewStub {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(name = "ar_preview", skip(self))]
    async fn request_mock_result(&self, subject: Option<ProductId>) -> Result<StubOutcome, StubError> {
        let product_id = subject.ok_or(StubError::MissingSubject(NAME))?;
        let ticket = self.pending.begin(NAME)?;
        debug!(%product_id, "Placing product");
        ticket.simulate_latency(self.delay, NAME).await?;
        Ok(StubOutcome::Product(product_id))
    }

    fn cancel(&self) -> bool {
        self.pending.cancel()
    }

    fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }
}

/// View controls of the AR modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArViewport {
    pub zoom: f64,
    pub offset: (f64, f64),
    pub rotating: bool,
}

impl Default for ArViewport {
    fn default() -> Self {
        Self { zoom: 1.0, offset: (0.0, 0.0), rotating: false }
    }
}

impl ArViewport {
    pub fn zoom_in(&mut self) -> f64 {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        self.zoom
    }

    /// Zoom as the whole percentage shown in the overlay.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
