//! Parties domain module: customers as seen by order placement.
//!
//! Customer records are owned by an external directory; this crate only
//! defines the shape the order workflow reads and the lookup port.

pub mod customer;
pub mod directory;

pub use customer::{Customer, CustomerId};
pub use directory::CustomerDirectory;
