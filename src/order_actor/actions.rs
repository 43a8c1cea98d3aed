use crate::domain::OrderStage;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order exactly one stage forward.
    ///
    /// # Errors
    /// Fails once the order is delivered.
    Advance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Result from Advance - the stage the order moved into
    Advance(OrderStage),
}
