/// Custom actions for Product entities.
///
/// Catalog records are immutable after load, so every action is a query.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reports whether the product can be added to a cart.
    CheckAvailability,
    /// Reports the saving against the original price.
    QuoteSavings,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from CheckAvailability
    CheckAvailability(bool),
    /// Result from QuoteSavings - amount saved and whole-number percentage
    QuoteSavings { amount: f64, percent: u32 },
}
