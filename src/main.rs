mod domain;
mod config;
mod fixtures;
mod clients;
mod search;
mod tracking;
mod stubs;
mod session;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;
mod order_actor;

use std::time::Duration;
use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, AppError, StorefrontSystem};
use crate::config::StorefrontConfig;
use crate::domain::ProductId;
use crate::fixtures::StorefrontFixture;
use crate::search::Direction;
use crate::stubs::MockCollaborator;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StorefrontConfig::load()?;
    let fixture = StorefrontFixture::load(config.fixture_path.as_deref())?;
    info!("Starting smart retail storefront");

    let system = StorefrontSystem::new(config, fixture)?;
    let (mut session, mut events) = system.open_session(system.default_collaborators());

    let event_log = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            info!(?event, "Storefront event");
        }
    });

    let span = tracing::info_span!("search");
    async {
        info!(suggestions = ?session.suggestions("head"), "Typing");
        let hits = session.on_search_submit("headphones").await?;
        for product in &session.state().results {
            info!(
                product = %product.name,
                stars = product.full_stars(),
                discount_percent = product.discount_percent(),
                "Search hit"
            );
        }
        info!(hits, "Text search finished");
        match session.on_voice_search().await? {
            Some(hits) => info!(transcript = %session.state().transcript, hits, "Voice search finished"),
            None => warn!("Voice search cancelled"),
        }

        // shopper taps the mic again and then changes their mind
        let voice = session.collaborators().voice;
        let stop_listening = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            voice.cancel()
        });
        if session.on_voice_search().await?.is_none() {
            info!("Second voice search cancelled");
        }
        if let Err(e) = stop_listening.await {
            error!("Voice cancel task failed: {:?}", e);
        }
        if let Some(hits) = session.on_image_search().await? {
            info!(hits, "Image search finished");
        }
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("browse");
    async {
        let index = session.on_category_cycle(Direction::Next).await?;
        info!(index, "Category changed");

        if let Some(product) = session.on_try_ar_request(ProductId(1)).await? {
            session.viewport_mut().zoom_in();
            session.viewport_mut().zoom_in();
            session.viewport_mut().zoom_out();
            info!(product = %product.name, zoom = session.state().viewport.zoom_percent(), "AR preview ready");
            session.close_ar();
        }

        match session.on_add_to_cart(ProductId(1)).await {
            Ok(quantity) => info!(quantity, total = session.cart().total(), "Cart updated"),
            Err(e) => error!(error = %e, "Add to cart failed"),
        }
        for line in session.cart().lines() {
            info!(product = %line.product.name, quantity = line.quantity, "Cart line");
        }
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_tracking");
    async {
        session.on_order_select(Some("ORD-2024-002")).await?;
        let outcome = session.wait_for_reveal().await;
        info!(?outcome, status = ?session.tracker().status_label(), "Timeline revealed");

        let stage = session.on_order_advance("ORD-2024-002").await?;
        info!(stage = stage.label(), "Order advanced");
        session.wait_for_reveal().await;
        match session.on_order_advance("ORD-2024-001").await {
            Ok(stage) => info!(stage = stage.label(), "Order advanced"),
            Err(e) => warn!(error = %e, "Order cannot advance"),
        }
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    match system.catalog_client.quote_savings(ProductId(1)).await {
        Ok((amount, percent)) => info!(amount, percent, "Savings on headphones"),
        Err(e) => error!(error = %e, "Savings quote failed"),
    }
    info!(
        total_savings = system.savings.total_savings(),
        total_spending = system.savings.total_spending(),
        average_monthly = system.savings.average_monthly_savings(),
        missed_offers = system.savings.missed_offers,
        "Savings summary"
    );

    // Shutdown system gracefully
    drop(session);
    system.shutdown().await?;
    if let Err(e) = event_log.await {
        error!("Event logger failed: {:?}", e);
    }

    info!("Application completed successfully");
    Ok(())
}
