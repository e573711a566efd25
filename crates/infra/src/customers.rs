use std::collections::HashMap;
use std::sync::RwLock;

use orderentry_core::ServiceError;
use orderentry_parties::{Customer, CustomerDirectory, CustomerId};

/// In-memory customer directory.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    inner: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.id_typed(), customer);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn get(&self, customer_id: CustomerId) -> Result<Customer, ServiceError> {
        let map = self
            .inner
            .read()
            .map_err(|_| ServiceError::unavailable("customer directory lock poisoned"))?;
        map.get(&customer_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("customer {customer_id}")))
    }
}
