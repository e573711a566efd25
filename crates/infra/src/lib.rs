//! Infrastructure layer: in-memory adapters for the order-placement ports and
//! their configuration.
//!
//! Real catalog, customer, tax, fulfillment and email backends are external;
//! these adapters stand in for them in tests, benchmarks and local runs.

pub mod backends;
pub mod catalog;
pub mod config;
pub mod customers;
pub mod fulfillment;
pub mod outbox;
pub mod tax_table;


pub use backends::InMemoryBackends;
pub use catalog::InMemoryProductCatalog;
pub use config::{ConfigError, InfraConfig};
pub use customers::InMemoryCustomerDirectory;
pub use fulfillment::InMemoryFulfillment;
pub use outbox::{InMemoryEmailOutbox, SentEmail};
pub use tax_table::InMemoryTaxTable;
