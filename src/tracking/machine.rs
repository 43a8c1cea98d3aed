use crate::domain::{Order, OrderStage};

pub const DELIVERED_MESSAGE: &str = "Your order has been delivered successfully!";

/// The stage recorded on the order. Never recomputed from tracking flags.
pub fn current_stage(order: &Order) -> OrderStage {
    order.stage
}

/// Stage indices `0..=current`, in the order the timeline reveals them.
pub fn reveal_sequence(order: &Order) -> Vec<usize> {
    (0..=current_stage(order).index()).collect()
}

pub fn describe_status(order: &Order) -> String {
    match current_stage(order) {
        OrderStage::Delivered => DELIVERED_MESSAGE.to_string(),
        stage => format!("Your order is currently being {}", stage.label().to_lowercase()),
    }
}

/// What the tracking panel is showing.
///
/// `Empty` answers every stage query with nothing so the caller renders a
/// placeholder instead of a timeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OrderTracker {
    #[default]
    Empty,
    Tracking(Order),
}

impl OrderTracker {
    pub fn from_selection(order: Option<Order>) -> Self {
        order.map_or(OrderTracker::Empty, OrderTracker::Tracking)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OrderTracker::Empty)
    }

    pub fn order(&self) -> Option<&Order> {
        match self {
            OrderTracker::Empty => None,
            OrderTracker::Tracking(order) => Some(order),
        }
    }

    pub fn current_stage(&self) -> Option<OrderStage> {
        self.order().map(current_stage)
    }

    pub fn reveal_sequence(&self) -> Vec<usize> {
        self.order().map(reveal_sequence).unwrap_or_default()
    }

    pub fn describe_status(&self) -> Option<String> {
        self.order().map(describe_status)
    }

    /// "Current Status" heading, e.g. `Shipped`.
    pub fn status_label(&self) -> Option<&'static str> {
        self.current_stage().map(OrderStage::label)
    }
}
