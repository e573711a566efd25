//! Order placement workflow.
//!
//! `OrderService` composes the five collaborator ports and runs one order
//! through them:
//!
//! ```text
//! Order
//!   ↓
//! 1. Validate (stock + SKU uniqueness, both always run)
//!   ↓
//! 2. Preconditions: customer id present, net total in range
//!   ↓
//! 3. Fulfill (first side effect)
//!   ↓
//! 4. Customer lookup → tax lookup
//!   ↓
//! 5. Total = net × Σ rates, assemble summary
//!   ↓
//! 6. Confirmation email
//! ```
//!
//! The service holds no state of its own; every call is independent.

use std::sync::Arc;

use thiserror::Error;

use orderentry_core::ServiceError;
use orderentry_parties::CustomerDirectory;
use orderentry_products::ProductAvailability;
use orderentry_tax::{TaxRateLookup, combined_rate};

use crate::fulfillment::OrderFulfillment;
use crate::notification::EmailNotifier;
use crate::order::{Order, net_total};
use crate::summary::OrderSummary;
use crate::validation::{ValidationError, validate_order};

/// Why an order could not be placed.
///
/// `Validation`, `MissingCustomer` and `NetTotalOverflow` are raised before
/// any collaborator with side effects has been called. The other variants carry the
/// collaborator's error unchanged (also available via `source()`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceOrderError {
    /// Stock or uniqueness rules failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The order has no customer id, so taxes cannot be resolved.
    #[error("order has no customer id")]
    MissingCustomer,

    /// A line total or the net total does not fit in a `Decimal`.
    #[error("order net total is out of range")]
    NetTotalOverflow,

    /// The combined tax rate or `net × rate` does not fit in a `Decimal`.
    #[error("order tax total is out of range")]
    TaxTotalOverflow,

    #[error("fulfillment failed: {0}")]
    Fulfillment(#[source] ServiceError),

    #[error("customer lookup failed: {0}")]
    CustomerLookup(#[source] ServiceError),

    #[error("tax lookup failed: {0}")]
    TaxLookup(#[source] ServiceError),
}

impl PlaceOrderError {
    /// Validation messages, if this is a validation failure.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(err) => Some(err.messages()),
            _ => None,
        }
    }

    /// The collaborator's own error, if a collaborator failed.
    pub fn collaborator_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Fulfillment(err) | Self::CustomerLookup(err) | Self::TaxLookup(err) => Some(err),
            Self::Validation(_)
            | Self::MissingCustomer
            | Self::NetTotalOverflow
            | Self::TaxTotalOverflow => None,
        }
    }
}

/// Order placement orchestrator.
///
/// Generic over its collaborators so each can be substituted independently
/// (`Arc<T>`, `&T` and `Arc<dyn Trait>` all implement the ports).
#[derive(Debug, Clone)]
pub struct OrderService<P, F, T, C, E> {
    products: P,
    fulfillment: F,
    taxes: T,
    customers: C,
    notifier: E,
}

/// `OrderService` over trait objects, for wiring chosen at runtime.
pub type DynOrderService = OrderService<
    Arc<dyn ProductAvailability>,
    Arc<dyn OrderFulfillment>,
    Arc<dyn TaxRateLookup>,
    Arc<dyn CustomerDirectory>,
    Arc<dyn EmailNotifier>,
>;

impl<P, F, T, C, E> OrderService<P, F, T, C, E> {
    pub fn new(products: P, fulfillment: F, taxes: T, customers: C, notifier: E) -> Self {
        Self {
            products,
            fulfillment,
            taxes,
            customers,
            notifier,
        }
    }
}

impl<P, F, T, C, E> OrderService<P, F, T, C, E>
where
    P: ProductAvailability,
    F: OrderFulfillment,
    T: TaxRateLookup,
    C: CustomerDirectory,
    E: EmailNotifier,
{
    /// Validate, price, fulfill and confirm one order.
    ///
    /// Collaborators are called in a fixed order. Validation failures, a
    /// missing customer id and an out-of-range net total are all detected
    /// before fulfillment is called; the customer id precondition is checked
    /// ahead of fulfillment even though the customer itself is looked up
    /// after it. Once fulfillment succeeded, later failures are returned
    /// as-is: nothing is rolled back and no email is sent.
    pub fn place_order(&self, order: &Order) -> Result<OrderSummary, PlaceOrderError> {
        tracing::debug!(lines = order.items.len(), "placing order");

        validate_order(order, &self.products).inspect_err(|err| {
            tracing::warn!(messages = ?err.messages(), "order rejected");
        })?;

        let customer_id = order.customer_id.ok_or_else(|| {
            tracing::warn!("order rejected: no customer id");
            PlaceOrderError::MissingCustomer
        })?;

        let net_total = net_total(order).ok_or_else(|| {
            tracing::warn!("order rejected: net total out of range");
            PlaceOrderError::NetTotalOverflow
        })?;

        let confirmation = self.fulfillment.fulfill(order).map_err(|err| {
            tracing::warn!(error = %err, "fulfillment failed");
            PlaceOrderError::Fulfillment(err)
        })?;
        tracing::debug!(
            order_id = %confirmation.order_id,
            order_number = %confirmation.order_number,
            "order fulfilled"
        );

        let customer = self.customers.get(customer_id).map_err(|err| {
            tracing::warn!(customer_id = %customer_id, error = %err, "customer lookup failed");
            PlaceOrderError::CustomerLookup(err)
        })?;

        let taxes = self
            .taxes
            .tax_entries(customer.postal_code(), customer.country())
            .map_err(|err| {
                tracing::warn!(
                    postal_code = customer.postal_code(),
                    country = customer.country(),
                    error = %err,
                    "tax lookup failed"
                );
                PlaceOrderError::TaxLookup(err)
            })?;

        let total = combined_rate(&taxes)
            .and_then(|rate| net_total.checked_mul(rate))
            .ok_or_else(|| {
                tracing::warn!(net_total = %net_total, "tax total out of range");
                PlaceOrderError::TaxTotalOverflow
            })?;

        let summary = OrderSummary {
            order_number: confirmation.order_number,
            order_id: confirmation.order_id,
            net_total,
            taxes,
            total,
        };

        self.notifier
            .send_order_confirmation_email(customer.id_typed(), summary.order_id);

        tracing::info!(
            order_id = %summary.order_id,
            order_number = %summary.order_number,
            customer_id = %customer_id,
            net_total = %summary.net_total,
            total = %summary.total,
            "order placed"
        );

        Ok(summary)
    }
}
