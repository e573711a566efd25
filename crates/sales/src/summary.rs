use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::ValueObject;
use orderentry_tax::{TaxEntry, combined_rate};

use crate::order::OrderId;

/// Result of a successful order placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_number: String,
    pub order_id: OrderId,
    /// Sum of line totals, before tax.
    pub net_total: Decimal,
    /// Tax entries exactly as returned by the tax lookup.
    pub taxes: Vec<TaxEntry>,
    /// `net_total × Σ taxes[i].rate`.
    pub total: Decimal,
}

impl OrderSummary {
    /// Combined rate the total was computed with (`None` on overflow).
    pub fn tax_rate(&self) -> Option<Decimal> {
        combined_rate(&self.taxes)
    }
}

impl ValueObject for OrderSummary {}
