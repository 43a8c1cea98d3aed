use crate::actor_framework::Entity;
use crate::domain::{Category, CategoryKind, Product, ProductId};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = ProductId;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &ProductId { &self.id }

    fn on_load(&mut self) -> Result<(), String> {
        self.validate()
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `CheckAvailability`: Returns the stock flag
    /// - `QuoteSavings`: Returns savings against the original price
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckAvailability => {
                Ok(ProductActionResult::CheckAvailability(self.in_stock))
            }
            ProductAction::QuoteSavings => {
                Ok(ProductActionResult::QuoteSavings {
                    amount: self.savings(),
                    percent: self.discount_percent(),
                })
            }
        }
    }
}

impl Entity for Category {
    type Id = CategoryKind;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &CategoryKind { &self.name }

    /// Categories are only fetched and listed; the action path is closed.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Err(format!("Category {} is read-only", self.name))
    }
}
