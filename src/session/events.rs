use crate::domain::{Category, Product, TrackingStep};

/// What the placeholder is standing in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoOrderSelected,
    NoProductSelected,
}

/// Output events delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontEvent {
    /// A search finished. An empty product list is the "no results" case.
    ResultsReady { query: String, products: Vec<Product> },
    StageRevealed(usize),
    StatusDescription(String),
    /// Timeline rows of the selected order, completion and timestamps included.
    Timeline { order_id: String, steps: Vec<TrackingStep> },
    CategoryChanged { index: usize, category: Category, products: Vec<Product> },
    ListeningChanged(bool),
    ArReady(Product),
    CartUpdated { item_count: u32, total: f64 },
    EmptyState(EmptyState),
}
