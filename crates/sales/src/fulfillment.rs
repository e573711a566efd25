//! Fulfillment port: hands a validated order to the fulfillment backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use orderentry_core::{ServiceError, ValueObject};

use crate::order::{Order, OrderId};

/// What the fulfillment backend returns for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Customer-facing order number (opaque).
    pub order_number: String,
    pub order_id: OrderId,
}

impl ValueObject for OrderConfirmation {}

/// Accepts validated orders.
///
/// A call either returns a confirmation or fails; callers do not retry.
pub trait OrderFulfillment: Send + Sync {
    fn fulfill(&self, order: &Order) -> Result<OrderConfirmation, ServiceError>;
}

impl<F> OrderFulfillment for Arc<F>
where
    F: OrderFulfillment + ?Sized,
{
    fn fulfill(&self, order: &Order) -> Result<OrderConfirmation, ServiceError> {
        (**self).fulfill(order)
    }
}

impl<F> OrderFulfillment for &F
where
    F: OrderFulfillment + ?Sized,
{
    fn fulfill(&self, order: &Order) -> Result<OrderConfirmation, ServiceError> {
        (**self).fulfill(order)
    }
}
