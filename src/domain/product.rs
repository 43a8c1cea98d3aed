use std::fmt;
use serde::Deserialize;
use super::CategoryKind;

/// Stable identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub original_price: f64,
    pub category: CategoryKind,
    pub rating: f64,
    pub reviews: u32,
    pub description: String,
    #[serde(default)]
    pub colors: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        original_price: f64,
        category: CategoryKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            original_price,
            category,
            rating: 0.0,
            reviews: 0,
            description: description.into(),
            colors: Vec::new(),
            in_stock: true,
        }
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> f64 {
        self.original_price - self.price
    }

    /// Whole-number discount off the original price, 0 for a free listing.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= 0.0 {
            return 0;
        }
        ((self.savings() / self.original_price) * 100.0).round().max(0.0) as u32
    }

    /// Number of filled stars for the rating widget.
    pub fn full_stars(&self) -> u8 {
        self.rating.floor().clamp(0.0, 5.0) as u8
    }

    /// Checks the fixture invariants for a single record.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.price >= 0.0) {
            return Err(format!("price must be non-negative, got {}", self.price));
        }
        if self.original_price < self.price {
            return Err(format!(
                "original price {} is below price {}",
                self.original_price, self.price
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!("rating {} outside 0-5", self.rating));
        }
        Ok(())
    }
}
