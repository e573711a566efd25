use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderentry_parties::CustomerId;
use orderentry_sales::{EmailNotifier, OrderId};

/// A confirmation email handed to the outbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub message_id: Uuid,
    pub customer_id: CustomerId,
    pub order_id: OrderId,
    pub sent_at: DateTime<Utc>,
}

/// In-memory email outbox: records every confirmation instead of delivering it.
#[derive(Debug, Default)]
pub struct InMemoryEmailOutbox {
    sent: Mutex<Vec<SentEmail>>,
}

impl InMemoryEmailOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded emails, oldest first.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl EmailNotifier for InMemoryEmailOutbox {
    fn send_order_confirmation_email(&self, customer_id: CustomerId, order_id: OrderId) {
        let email = SentEmail {
            message_id: Uuid::now_v7(),
            customer_id,
            order_id,
            sent_at: Utc::now(),
        };
        match self.sent.lock() {
            Ok(mut sent) => sent.push(email),
            Err(_) => tracing::error!(
                customer_id = %customer_id,
                order_id = %order_id,
                "email outbox lock poisoned; confirmation dropped"
            ),
        }
    }
}
