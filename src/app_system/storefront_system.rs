use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{CatalogClient, OrderClient};
use crate::config::StorefrontConfig;
use crate::domain::SavingsReport;
use crate::fixtures::StorefrontFixture;
use crate::session::{Collaborators, SessionSettings, StorefrontEvent, StorefrontSession};
use crate::stubs::{ArPreviewStub, ImageSearchStub, VoiceSearchStub};
use crate::tracking::RevealSchedule;
use super::AppError;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting the catalog and order actors, wiring sessions to
/// them, and handling shutdown.
pub struct StorefrontSystem {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    pub savings: SavingsReport,
    config: StorefrontConfig,
    voice_commands: Vec<String>,
    search_suggestions: Vec<String>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    pub fn new(config: StorefrontConfig, fixture: StorefrontFixture) -> Result<Self, AppError> {
        let StorefrontFixture {
            products,
            categories,
            orders,
            savings,
            voice_commands,
            search_suggestions,
        } = fixture;
        info!(
            products = products.len(),
            categories = categories.len(),
            orders = orders.len(),
            "Starting storefront actors"
        );

        // 1. Catalog
        let (product_actor, product_client) = ResourceActor::new(config.actor_buffer, products)?;
        let (category_actor, category_client) = ResourceActor::new(config.actor_buffer, categories)?;
        let catalog_client = CatalogClient::new(product_client, category_client);

        // 2. Orders
        let (order_actor, order_resource_client) = ResourceActor::new(config.actor_buffer, orders)?;
        let order_client = OrderClient::new(order_resource_client);

        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(category_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        Ok(Self {
            catalog_client,
            order_client,
            savings,
            config,
            voice_commands,
            search_suggestions,
            handles,
        })
    }

    /// Stub collaborators timed from the config.
    pub fn default_collaborators(&self) -> Collaborators {
        Collaborators {
            voice: Arc::new(VoiceSearchStub::new(self.voice_commands.clone(), self.config.voice_delay())),
            image: Arc::new(ImageSearchStub::new(self.config.image_delay())),
            ar: Arc::new(ArPreviewStub::new(self.config.ar_delay())),
        }
    }

    /// Opens a shopper session with its own event channel.
    pub fn open_session(&self, collaborators: Collaborators) -> (StorefrontSession, mpsc::Receiver<StorefrontEvent>) {
        let (events, receiver) = mpsc::channel(self.config.actor_buffer);
        let settings = SessionSettings {
            search_delay: self.config.search_delay(),
            reveal: RevealSchedule {
                initial_delay: self.config.reveal_initial_delay(),
                step: self.config.reveal_step(),
            },
            suggestion_limit: self.config.suggestion_limit,
            suggestion_candidates: self.search_suggestions.clone(),
        };
        let session = StorefrontSession::new(
            self.catalog_client.clone(),
            self.order_client.clone(),
            collaborators,
            settings,
            events,
        );
        (session, receiver)
    }

    /// Closes the actors' channels and waits for them to stop. Sessions hold
    /// client clones, so drop them first.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        drop(self.catalog_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::ActorTask(format!("{:?}", e)));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
