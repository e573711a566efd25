//! Products domain module.
//!
//! Catalog records as the order workflow sees them, plus the stock
//! availability port the workflow queries. Catalog persistence lives behind
//! that port (no IO, no HTTP, no storage here).

pub mod availability;
pub mod product;

pub use availability::ProductAvailability;
pub use product::{Product, ProductId};
