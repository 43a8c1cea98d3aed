//! Load-once storefront data.
//!
//! The bundled fixture is compiled in; a `fixture_path` in the config points
//! at a replacement file with the same shape.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use crate::domain::{Category, Order, Product, ProductId, SavingsReport};

const EMBEDDED_FIXTURE: &str = include_str!("../fixtures/storefront.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(String),
    #[error("Invalid savings report: {0}")]
    InvalidSavings(String),
    #[error("Fixture has no voice commands")]
    NoVoiceCommands,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontFixture {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub orders: Vec<Order>,
    pub savings: SavingsReport,
    pub voice_commands: Vec<String>,
    #[serde(default)]
    pub search_suggestions: Vec<String>,
}

impl StorefrontFixture {
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loading fixture from file");
        Self::from_json(&raw)
    }

    /// Uses `path` when given, the bundled fixture otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, FixtureError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_json::from_str(raw)?;
        fixture.validate()?;
        debug!(
            products = fixture.products.len(),
            categories = fixture.categories.len(),
            orders = fixture.orders.len(),
            "Fixture validated"
        );
        Ok(fixture)
    }

    fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            product.validate().map_err(|reason| FixtureError::InvalidProduct {
                id: product.id,
                reason,
            })?;
            if !seen.insert(product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }
        }

        let mut order_ids = HashSet::new();
        for order in &self.orders {
            if !order_ids.insert(order.id.as_str()) {
                return Err(FixtureError::DuplicateOrder(order.id.clone()));
            }
        }

        self.savings.validate().map_err(FixtureError::InvalidSavings)?;

        if self.voice_commands.is_empty() {
            return Err(FixtureError::NoVoiceCommands);
        }
        Ok(())
    }
}
