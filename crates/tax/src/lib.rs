//! Tax domain module: jurisdiction tax entries and the rate lookup port.

pub mod entry;
pub mod lookup;

pub use entry::{TaxEntry, combined_rate};
pub use lookup::TaxRateLookup;
