use tracing::{debug, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Category, CategoryKind, Product, ProductId};
use crate::product_actor::{CatalogError, ProductAction, ProductActionResult};
use crate::search;

/// Client for the catalog actors (products and categories).
#[derive(Clone)]
pub struct CatalogClient {
    products: ResourceClient<Product>,
    categories: ResourceClient<Category>,
}

impl CatalogClient {
    pub fn new(products: ResourceClient<Product>, categories: ResourceClient<Category>) -> Self {
        Self { products, categories }
    }

    /// Runs the search engine over a fresh catalog snapshot.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let corpus = self.list_products().await?;
        let results = search::search(query, &corpus);
        info!(hits = results.len(), "Search complete");
        Ok(results)
    }

    #[instrument(skip(self))]
    pub async fn products_in_category(&self, name: &str) -> Result<Vec<Product>, CatalogError> {
        let corpus = self.list_products().await?;
        Ok(search::products_in_category(name, &corpus))
    }

    #[instrument(skip(self))]
    pub async fn check_availability(&self, id: ProductId) -> Result<bool, CatalogError> {
        debug!("Sending request");
        match self.products.perform_action(id, ProductAction::CheckAvailability).await {
            Ok(ProductActionResult::CheckAvailability(in_stock)) => Ok(in_stock),
            Ok(other) => Err(CatalogError::UnexpectedResult(format!("{:?}", other))),
            Err(e) => Err(map_action_error(id, e)),
        }
    }

    /// Savings against the original price, as (amount, percent).
    #[instrument(skip(self))]
    pub async fn quote_savings(&self, id: ProductId) -> Result<(f64, u32), CatalogError> {
        debug!("Sending request");
        match self.products.perform_action(id, ProductAction::QuoteSavings).await {
            Ok(ProductActionResult::QuoteSavings { amount, percent }) => Ok((amount, percent)),
            Ok(other) => Err(CatalogError::UnexpectedResult(format!("{:?}", other))),
            Err(e) => Err(map_action_error(id, e)),
        }
    }
}

fn map_action_error(id: ProductId, error: FrameworkError) -> CatalogError {
    match error {
        FrameworkError::NotFound(_) => CatalogError::ProductNotFound(id),
        other => CatalogError::ActorCommunicationError(other.to_string()),
    }
}

impl_client_methods!(CatalogClient, products, Product, ProductId, CatalogError, product, products);
impl_client_methods!(CatalogClient, categories, Category, CategoryKind, CatalogError, category, categories);
