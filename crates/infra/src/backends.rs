//! In-memory wiring of every order-placement port.

use std::sync::Arc;

use orderentry_parties::CustomerDirectory;
use orderentry_products::ProductAvailability;
use orderentry_sales::{DynOrderService, EmailNotifier, OrderFulfillment, OrderService};
use orderentry_tax::TaxRateLookup;

use crate::catalog::InMemoryProductCatalog;
use crate::config::InfraConfig;
use crate::customers::InMemoryCustomerDirectory;
use crate::fulfillment::InMemoryFulfillment;
use crate::outbox::InMemoryEmailOutbox;
use crate::tax_table::InMemoryTaxTable;

/// One shared instance of each in-memory backend.
///
/// Handles are `Arc`s so tests can seed data and inspect recorded side effects
/// while a service built from the same backends is running.
#[derive(Debug, Clone)]
pub struct InMemoryBackends {
    pub catalog: Arc<InMemoryProductCatalog>,
    pub fulfillment: Arc<InMemoryFulfillment>,
    pub taxes: Arc<InMemoryTaxTable>,
    pub customers: Arc<InMemoryCustomerDirectory>,
    pub outbox: Arc<InMemoryEmailOutbox>,
}

impl InMemoryBackends {
    pub fn new(config: &InfraConfig) -> Self {
        Self {
            catalog: Arc::new(InMemoryProductCatalog::new()),
            fulfillment: Arc::new(InMemoryFulfillment::new(config)),
            taxes: Arc::new(InMemoryTaxTable::new()),
            customers: Arc::new(InMemoryCustomerDirectory::new()),
            outbox: Arc::new(InMemoryEmailOutbox::new()),
        }
    }

    /// An `OrderService` backed by these instances.
    pub fn order_service(&self) -> DynOrderService {
        let products: Arc<dyn ProductAvailability> = self.catalog.clone();
        let fulfillment: Arc<dyn OrderFulfillment> = self.fulfillment.clone();
        let taxes: Arc<dyn TaxRateLookup> = self.taxes.clone();
        let customers: Arc<dyn CustomerDirectory> = self.customers.clone();
        let notifier: Arc<dyn EmailNotifier> = self.outbox.clone();
        OrderService::new(products, fulfillment, taxes, customers, notifier)
    }
}

impl Default for InMemoryBackends {
    fn default() -> Self {
        Self::new(&InfraConfig::default())
    }
}
