//! Sales domain module: order placement.
//!
//! This crate holds the order data model, the placement rules, and the
//! `OrderService` workflow. Every external system (catalog stock,
//! fulfillment, tax tables, customer directory, email) is reached through a
//! port trait; no IO happens here.

pub mod fulfillment;
pub mod notification;
pub mod order;
pub mod service;
pub mod summary;
pub mod validation;

pub use fulfillment::{OrderConfirmation, OrderFulfillment};
pub use notification::EmailNotifier;
pub use order::{Order, OrderId, OrderItem, net_total};
pub use service::{DynOrderService, OrderService, PlaceOrderError};
pub use summary::OrderSummary;
pub use validation::{
    NOT_IN_STOCK, SKUS_NOT_UNIQUE, ValidationError, all_in_stock, has_unique_skus,
    out_of_stock_skus, validate_order,
};
