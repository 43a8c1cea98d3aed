use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const STAGE_COUNT: usize = 5;

/// Fulfilment stage of an order. Strictly linear; `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    Placed,
    Packed,
    Shipped,
    OutForDelivery,
    Delivered,
}

impl OrderStage {
    pub const ALL: [OrderStage; STAGE_COUNT] = [
        OrderStage::Placed,
        OrderStage::Packed,
        OrderStage::Shipped,
        OrderStage::OutForDelivery,
        OrderStage::Delivered,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Timeline label for the stage.
    pub fn label(self) -> &'static str {
        match self {
            OrderStage::Placed => "Order Placed",
            OrderStage::Packed => "Packed",
            OrderStage::Shipped => "Shipped",
            OrderStage::OutForDelivery => "Out for Delivery",
            OrderStage::Delivered => "Delivered",
        }
    }

    /// The single forward transition, `None` once delivered.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

/// One row of the tracking timeline, derived from the order stage.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingStep {
    pub stage: OrderStage,
    pub completed: bool,
    pub timestamp: Option<NaiveDateTime>,
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    pub id: String,
    pub stage: OrderStage,
    pub items: Vec<String>,
    pub total: f64,
    pub order_date: NaiveDate,
    pub estimated_delivery: NaiveDate,
    pub timestamps: [Option<NaiveDateTime>; STAGE_COUNT],
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        stage: OrderStage,
        items: Vec<String>,
        total: f64,
        order_date: NaiveDate,
        estimated_delivery: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            stage,
            items,
            total,
            order_date,
            estimated_delivery,
            timestamps: [None; STAGE_COUNT],
        }
    }

    pub fn status_index(&self) -> usize {
        self.stage.index()
    }

    /// Completion is derived from the stage; the stage is the source of truth.
    pub fn tracking_steps(&self) -> Vec<TrackingStep> {
        OrderStage::ALL
            .into_iter()
            .map(|stage| TrackingStep {
                stage,
                completed: stage <= self.stage,
                timestamp: self.timestamps[stage.index()],
            })
            .collect()
    }
}

/// Errors raised while turning a fixture record into an [`Order`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidOrder {
    #[error("order {id}: status index {index} outside 0-4")]
    StatusIndexOutOfRange { id: String, index: usize },
    #[error("order {id}: status {status:?} disagrees with status index {index}")]
    StatusMismatch { id: String, status: OrderStage, index: usize },
    #[error("order {id}: expected 5 tracking steps, found {found}")]
    TrackingStepCount { id: String, found: usize },
    #[error("order {id}: negative total {total}")]
    NegativeTotal { id: String, total: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackingStepRecord {
    #[allow(dead_code)]
    name: String,
    completed: bool,
    timestamp: Option<NaiveDateTime>,
}

/// Wire shape of an order in the storefront fixture.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRecord {
    id: String,
    status: OrderStage,
    status_index: usize,
    items: Vec<String>,
    total: f64,
    order_date: NaiveDate,
    estimated_delivery: NaiveDate,
    tracking_steps: Vec<TrackingStepRecord>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = InvalidOrder;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let stage = OrderStage::from_index(record.status_index).ok_or_else(|| {
            InvalidOrder::StatusIndexOutOfRange { id: record.id.clone(), index: record.status_index }
        })?;
        if stage != record.status {
            return Err(InvalidOrder::StatusMismatch {
                id: record.id,
                status: record.status,
                index: record.status_index,
            });
        }
        if record.tracking_steps.len() != STAGE_COUNT {
            return Err(InvalidOrder::TrackingStepCount {
                id: record.id,
                found: record.tracking_steps.len(),
            });
        }
        if !(record.total >= 0.0) {
            return Err(InvalidOrder::NegativeTotal { id: record.id, total: record.total });
        }

        let mut timestamps = [None; STAGE_COUNT];
        for (i, step) in record.tracking_steps.into_iter().enumerate() {
            let expected = i <= stage.index();
            if step.completed != expected {
                warn!(order_id = %record.id, step = i, "Tracking flag disagrees with status index; using status index");
            }
            timestamps[i] = step.timestamp;
        }

        Ok(Self {
            id: record.id,
            stage,
            items: record.items,
            total: record.total,
            order_date: record.order_date,
            estimated_delivery: record.estimated_delivery,
            timestamps,
        })
    }
}
