use crate::actor_framework::Entity;
use crate::domain::Order;
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = String;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String { &self.id }

    /// Handles order-specific actions.
    ///
    /// Transitions are forward only; there is no way back to an earlier stage.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::Advance => match self.stage.next() {
                Some(next) => {
                    self.stage = next;
                    Ok(OrderActionResult::Advance(next))
                }
                None => Err(format!("Order {} is already delivered", self.id)),
            },
        }
    }
}
