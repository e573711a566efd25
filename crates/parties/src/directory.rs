//! Customer lookup port.

use std::sync::Arc;

use orderentry_core::ServiceError;

use crate::customer::{Customer, CustomerId};

/// Resolves customer ids to customer records.
///
/// Implementations report an unknown id as [`ServiceError::NotFound`]; there is
/// no "maybe" result.
pub trait CustomerDirectory: Send + Sync {
    fn get(&self, customer_id: CustomerId) -> Result<Customer, ServiceError>;
}

impl<D> CustomerDirectory for Arc<D>
where
    D: CustomerDirectory + ?Sized,
{
    fn get(&self, customer_id: CustomerId) -> Result<Customer, ServiceError> {
        (**self).get(customer_id)
    }
}

impl<D> CustomerDirectory for &D
where
    D: CustomerDirectory + ?Sized,
{
    fn get(&self, customer_id: CustomerId) -> Result<Customer, ServiceError> {
        (**self).get(customer_id)
    }
}
