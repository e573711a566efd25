use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::{DomainError, DomainResult, ValueObject, int_id};
use orderentry_parties::CustomerId;
use orderentry_products::Product;

int_id! {
    /// Internal order identifier assigned by the fulfillment backend.
    pub struct OrderId(i64);
}

/// Order line: one product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product: Product,
    quantity: u32,
}

impl OrderItem {
    /// Create an order line. Quantity must be at least 1.
    pub fn new(product: Product, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive (sku {})",
                product.sku()
            )));
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn sku(&self) -> &str {
        self.product.sku()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `quantity × unit price`, exact. `None` if the product does not fit in
    /// a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.product.price().checked_mul(Decimal::from(self.quantity))
    }
}

impl ValueObject for OrderItem {}

/// Customer order as submitted for placement.
///
/// A plain data holder: lines are kept in insertion order and nothing is
/// checked here. SKU uniqueness and stock are verified by
/// [`validate_order`](crate::validation::validate_order) when the order is placed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: Option<CustomerId>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Empty order with no customer attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            items: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// SKUs in line order (duplicates included).
    pub fn skus(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(OrderItem::sku)
    }
}

impl ValueObject for Order {}

/// Net total: sum of every line's `quantity × price`, before tax.
///
/// Returns `None` when a line total or the running sum overflows `Decimal`.
pub fn net_total(order: &Order) -> Option<Decimal> {
    order
        .items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
}
