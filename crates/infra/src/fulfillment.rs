use std::sync::Mutex;

use orderentry_core::ServiceError;
use orderentry_sales::{Order, OrderConfirmation, OrderFulfillment, OrderId};

use crate::config::InfraConfig;

#[derive(Debug)]
struct FulfillmentState {
    next_id: i64,
    fulfilled: Vec<(OrderConfirmation, Order)>,
    failure: Option<ServiceError>,
}

/// In-memory fulfillment backend.
///
/// Issues sequential order ids with `PREFIX-000042` order numbers and keeps
/// every accepted order. [`fail_with`](Self::fail_with) makes subsequent calls
/// fail, which is how tests simulate an unavailable backend.
#[derive(Debug)]
pub struct InMemoryFulfillment {
    prefix: String,
    state: Mutex<FulfillmentState>,
}

impl InMemoryFulfillment {
    pub fn new(config: &InfraConfig) -> Self {
        Self {
            prefix: config.order_number_prefix.clone(),
            state: Mutex::new(FulfillmentState {
                next_id: config.order_id_start,
                fulfilled: Vec::new(),
                failure: None,
            }),
        }
    }

    /// Make every following call fail with `error` (`None` restores normal operation).
    pub fn fail_with(&self, error: Option<ServiceError>) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = error;
        }
    }

    /// Accepted orders with their confirmations, oldest first.
    pub fn fulfilled(&self) -> Vec<(OrderConfirmation, Order)> {
        self.state
            .lock()
            .map(|s| s.fulfilled.clone())
            .unwrap_or_default()
    }

    pub fn fulfilled_count(&self) -> usize {
        self.state.lock().map(|s| s.fulfilled.len()).unwrap_or(0)
    }
}

impl Default for InMemoryFulfillment {
    fn default() -> Self {
        Self::new(&InfraConfig::default())
    }
}

impl OrderFulfillment for InMemoryFulfillment {
    fn fulfill(&self, order: &Order) -> Result<OrderConfirmation, ServiceError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ServiceError::unavailable("fulfillment state lock poisoned"))?;

        if let Some(err) = &state.failure {
            return Err(err.clone());
        }

        let order_id = OrderId::new(state.next_id);
        state.next_id += 1;

        let confirmation = OrderConfirmation {
            order_number: format!("{}-{:06}", self.prefix, order_id.get()),
            order_id,
        };
        state.fulfilled.push((confirmation.clone(), order.clone()));

        tracing::debug!(order_id = %order_id, "in-memory fulfillment accepted order");
        Ok(confirmation)
    }
}
