//! # Storefront session
//!
//! The view state of one shopper, owned by the presentation layer. Input
//! events arrive as method calls; results leave as [`StorefrontEvent`]s on the
//! session's event channel.
//!
//! A session handles one input event at a time (`&mut self`), so a search
//! cannot overlap another search. The reveal timeline runs in the background
//! and is replaced whenever a new order is selected.

pub mod cart;
pub mod error;
pub mod events;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::{CatalogClient, OrderClient};
use crate::domain::{OrderStage, Product, ProductId};
use crate::product_actor::CatalogError;
use crate::search::{self, Direction};
use crate::stubs::{ArViewport, MockCollaborator, StubError, StubOutcome};
use crate::tracking::{self, OrderTracker, RevealAnimator, RevealOutcome, RevealSchedule};

pub use cart::{Cart, CartLine};
pub use error::SessionError;
pub use events::{EmptyState, StorefrontEvent};

/// The stub collaborators a session talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub voice: Arc<dyn MockCollaborator>,
    pub image: Arc<dyn MockCollaborator>,
    pub ar: Arc<dyn MockCollaborator>,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub search_delay: Duration,
    pub reveal: RevealSchedule,
    pub suggestion_limit: usize,
    pub suggestion_candidates: Vec<String>,
}

/// Per-view UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub search_query: String,
    pub transcript: String,
    pub searching: bool,
    pub listening: bool,
    pub results: Vec<Product>,
    pub active_category: usize,
    pub ar_product: Option<Product>,
    pub viewport: ArViewport,
}

pub struct StorefrontSession {
    catalog: CatalogClient,
    orders: OrderClient,
    collaborators: Collaborators,
    settings: SessionSettings,
    events: mpsc::Sender<StorefrontEvent>,
    state: ViewState,
    tracker: OrderTracker,
    cart: Cart,
    reveal: RevealAnimator,
}

impl StorefrontSession {
    pub fn new(
        catalog: CatalogClient,
        orders: OrderClient,
        collaborators: Collaborators,
        settings: SessionSettings,
        events: mpsc::Sender<StorefrontEvent>,
    ) -> Self {
        let reveal = RevealAnimator::new(settings.reveal);
        Self {
            catalog,
            orders,
            collaborators,
            settings,
            events,
            state: ViewState::default(),
            tracker: OrderTracker::Empty,
            cart: Cart::default(),
            reveal,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn tracker(&self) -> &OrderTracker {
        &self.tracker
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Handles to the stubs, for cancelling a pending request from elsewhere.
    pub fn collaborators(&self) -> Collaborators {
        self.collaborators.clone()
    }

    async fn emit(&self, event: StorefrontEvent) -> Result<(), SessionError> {
        self.events.send(event).await.map_err(|_| SessionError::EventsClosed)
    }

    /// Type-ahead suggestions for the search box.
    pub fn suggestions(&self, transcript: &str) -> Vec<String> {
        search::suggestions(transcript, &self.settings.suggestion_candidates, self.settings.suggestion_limit)
    }

    // --- Search ---

    /// Runs a search after the simulated search delay and publishes the
    /// results. Returns the number of hits; zero is the "no results" case.
    #[instrument(skip(self))]
    pub async fn on_search_submit(&mut self, text: &str) -> Result<usize, SessionError> {
        self.state.search_query = text.to_string();
        self.state.searching = true;
        tokio::time::sleep(self.settings.search_delay).await;
        let results = self.catalog.search(text).await;
        self.state.searching = false;

        let results = results?;
        let hits = results.len();
        if hits == 0 {
            info!("No products matched");
        }
        self.state.results = results.clone();
        self.emit(StorefrontEvent::ResultsReady { query: text.to_string(), products: results }).await?;
        Ok(hits)
    }

    /// Listens through the voice stub and searches for what it heard.
    /// `Ok(None)` means listening was cancelled.
    #[instrument(skip(self))]
    pub async fn on_voice_search(&mut self) -> Result<Option<usize>, SessionError> {
        let voice = self.collaborators.voice.clone();
        self.state.listening = true;
        self.emit(StorefrontEvent::ListeningChanged(true)).await?;
        let outcome = voice.request_mock_result(None).await;
        self.state.listening = false;
        self.emit(StorefrontEvent::ListeningChanged(false)).await?;
        self.search_for(voice.name(), outcome).await
    }

    /// Analyzes an "uploaded image" through the image stub and searches for
    /// the detected product. `Ok(None)` means analysis was cancelled.
    #[instrument(skip(self))]
    pub async fn on_image_search(&mut self) -> Result<Option<usize>, SessionError> {
        let image = self.collaborators.image.clone();
        let outcome = image.request_mock_result(None).await;
        self.search_for(image.name(), outcome).await
    }

    async fn search_for(
        &mut self,
        stub: &'static str,
        outcome: Result<StubOutcome, StubError>,
    ) -> Result<Option<usize>, SessionError> {
        match outcome {
            Ok(StubOutcome::SearchTerm(term)) => {
                self.state.transcript = term.clone();
                self.on_search_submit(&term).await.map(Some)
            }
            Ok(StubOutcome::Product(_)) => Err(SessionError::UnexpectedOutcome(stub)),
            Err(StubError::Cancelled(_)) => {
                info!(stub, "Request cancelled");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    // --- Category aisle ---

    #[instrument(skip(self))]
    pub async fn on_category_select(&mut self, index: usize) -> Result<(), SessionError> {
        let categories = self.catalog.list_categories().await?;
        let category = categories
            .get(index)
            .cloned()
            .ok_or(SessionError::CategoryOutOfRange { index, count: categories.len() })?;
        let products = self.catalog.products_in_category(category.name.name()).await?;
        self.state.active_category = index;
        self.emit(StorefrontEvent::CategoryChanged { index, category, products }).await
    }

    #[instrument(skip(self))]
    pub async fn on_category_cycle(&mut self, direction: Direction) -> Result<usize, SessionError> {
        let count = self.catalog.list_categories().await?.len();
        if count == 0 {
            return Err(SessionError::CategoryOutOfRange { index: 0, count });
        }
        let next = search::cycle(direction, self.state.active_category, count);
        self.on_category_select(next).await?;
        Ok(next)
    }

    // --- Order tracking ---

    /// Shows the tracking timeline for `order_id`, or the placeholder when
    /// nothing (or an unknown order) is selected.
    #[instrument(skip(self))]
    pub async fn on_order_select(&mut self, order_id: Option<&str>) -> Result<(), SessionError> {
        let tracker = self.orders.tracker(order_id).await?;
        if self.reveal.cancel() {
            debug!("Replaced running reveal");
        }
        match &tracker {
            OrderTracker::Empty => {
                self.emit(StorefrontEvent::EmptyState(EmptyState::NoOrderSelected)).await?;
            }
            OrderTracker::Tracking(order) => {
                self.emit(StorefrontEvent::StatusDescription(tracking::describe_status(order))).await?;
                self.emit(StorefrontEvent::Timeline {
                    order_id: order.id.clone(),
                    steps: order.tracking_steps(),
                })
                .await?;
                self.reveal.start(tracking::reveal_sequence(order), self.events.clone());
            }
        }
        self.tracker = tracker;
        Ok(())
    }

    /// Moves an order one stage forward and shows its refreshed timeline.
    #[instrument(skip(self))]
    pub async fn on_order_advance(&mut self, order_id: &str) -> Result<OrderStage, SessionError> {
        let stage = self.orders.advance_order(order_id.to_string()).await?;
        self.on_order_select(Some(order_id)).await?;
        Ok(stage)
    }

    /// Waits until the running timeline reveal has finished.
    pub async fn wait_for_reveal(&mut self) -> Option<RevealOutcome> {
        self.reveal.finish().await
    }

    // --- AR preview ---

    /// Opens the AR preview for a product once the AR stub has placed it.
    /// `Ok(None)` means the product is unknown or placement was cancelled.
    #[instrument(skip(self))]
    pub async fn on_try_ar_request(&mut self, product_id: ProductId) -> Result<Option<Product>, SessionError> {
        let Some(product) = self.catalog.get_product(product_id).await? else {
            warn!("AR requested for unknown product");
            self.emit(StorefrontEvent::EmptyState(EmptyState::NoProductSelected)).await?;
            return Ok(None);
        };

        let ar = self.collaborators.ar.clone();
        self.state.ar_product = Some(product.clone());
        self.state.viewport.reset();
        self.state.viewport.rotating = true;
        let outcome = ar.request_mock_result(Some(product_id)).await;
        self.state.viewport.rotating = false;

        let failure = match outcome {
            Ok(StubOutcome::Product(placed)) if placed == product_id => {
                self.emit(StorefrontEvent::ArReady(product.clone())).await?;
                return Ok(Some(product));
            }
            Ok(_) => Err(SessionError::UnexpectedOutcome(ar.name())),
            Err(StubError::Cancelled(_)) => {
                info!("AR placement cancelled");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        };
        // nothing was placed, so the modal stays closed
        self.state.ar_product = None;
        self.state.viewport.reset();
        failure
    }

    pub fn viewport_mut(&mut self) -> &mut ArViewport {
        &mut self.state.viewport
    }

    pub fn close_ar(&mut self) {
        self.collaborators.ar.cancel();
        self.state.ar_product = None;
        self.state.viewport.reset();
    }

    // --- Cart ---

    /// Adds one unit of a product. Returns the new quantity on the line.
    #[instrument(skip(self))]
    pub async fn on_add_to_cart(&mut self, product_id: ProductId) -> Result<u32, SessionError> {
        if !self.catalog.check_availability(product_id).await? {
            return Err(CatalogError::OutOfStock(product_id.to_string()).into());
        }
        let product = self
            .catalog
            .get_product(product_id)
            .await?
            .ok_or(CatalogError::ProductNotFound(product_id))?;
        let quantity = self.cart.add(product)?;
        info!(quantity, "Added to cart");
        self.emit(StorefrontEvent::CartUpdated {
            item_count: self.cart.item_count(),
            total: self.cart.total(),
        })
        .await?;
        Ok(quantity)
    }
}
