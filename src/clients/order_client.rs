use tracing::{error, info, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Order, OrderStage};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::tracking::OrderTracker;

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Builds the tracking view for a selection. Unknown ids and no selection
    /// both give the empty tracker.
    #[instrument(skip(self))]
    pub async fn tracker(&self, id: Option<&str>) -> Result<OrderTracker, OrderError> {
        let order = match id {
            Some(id) => self.get_order(id.to_string()).await?,
            None => None,
        };
        if order.is_none() {
            info!("No order to track");
        }
        Ok(OrderTracker::from_selection(order))
    }

    /// Moves an order one stage forward.
    #[instrument(skip(self))]
    pub async fn advance_order(&self, id: String) -> Result<OrderStage, OrderError> {
        match self.inner.perform_action(id.clone(), OrderAction::Advance).await {
            Ok(OrderActionResult::Advance(stage)) => {
                info!(stage = stage.label(), "Order advanced");
                Ok(stage)
            }
            Err(FrameworkError::NotFound(_)) => Err(OrderError::NotFound(id)),
            Err(FrameworkError::Rejected(reason)) => {
                error!(%reason, "Transition rejected");
                Err(OrderError::TransitionRejected(reason))
            }
            Err(e) => Err(OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl_client_methods!(OrderClient, inner, Order, String, OrderError, order, orders);
