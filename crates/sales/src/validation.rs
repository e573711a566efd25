//! Order placement rules.
//!
//! Rules are free functions over the plain [`Order`] value and the
//! availability port, so they can be exercised with any substitute catalog.

use std::collections::HashSet;

use thiserror::Error;

use orderentry_products::ProductAvailability;

use crate::order::Order;

/// Reported when at least one line's SKU is not currently in stock.
pub const NOT_IN_STOCK: &str = "One or more items are not in stock.";

/// Reported when two or more lines share a SKU.
pub const SKUS_NOT_UNIQUE: &str = "All skus are not unique.";

/// An order was rejected before anything was sent to fulfillment.
///
/// Carries every failed rule's message in check order (stock before
/// uniqueness). `Display` shows the first message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", self.message())]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// `None` when there is nothing to report.
    pub fn from_messages<I, S>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// First (summary) message.
    pub fn message(&self) -> &str {
        self.messages.first().map(String::as_str).unwrap_or_default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

/// True when no two lines share a SKU. An empty order is unique.
pub fn has_unique_skus(order: &Order) -> bool {
    let mut seen = HashSet::with_capacity(order.items.len());
    order.skus().all(|sku| seen.insert(sku))
}

/// SKUs the availability port reports as out of stock, in line order.
///
/// Every line is queried, even after the first miss.
pub fn out_of_stock_skus<'a, P>(order: &'a Order, products: &P) -> Vec<&'a str>
where
    P: ProductAvailability + ?Sized,
{
    order
        .skus()
        .filter(|sku| !products.is_in_stock(sku))
        .collect()
}

pub fn all_in_stock<P>(order: &Order, products: &P) -> bool
where
    P: ProductAvailability + ?Sized,
{
    out_of_stock_skus(order, products).is_empty()
}

/// Run every placement rule and collect the failures.
///
/// Both rules always run so a single rejection reports every problem.
pub fn validate_order<P>(order: &Order, products: &P) -> Result<(), ValidationError>
where
    P: ProductAvailability + ?Sized,
{
    let mut messages = Vec::with_capacity(2);

    let missing = out_of_stock_skus(order, products);
    if !missing.is_empty() {
        tracing::debug!(skus = ?missing, "order lines out of stock");
        messages.push(NOT_IN_STOCK);
    }

    if !has_unique_skus(order) {
        messages.push(SKUS_NOT_UNIQUE);
    }

    match ValidationError::from_messages(messages) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use orderentry_products::{Product, ProductId};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use crate::order::OrderItem;

    /// Availability stub: everything is in stock except the listed SKUs.
    #[derive(Default)]
    struct Catalog {
        out_of_stock: Vec<String>,
        queries: AtomicUsize,
    }

    impl Catalog {
        fn without(skus: &[&str]) -> Self {
            Self {
                out_of_stock: skus.iter().map(|s| s.to_string()).collect(),
                queries: AtomicUsize::new(0),
            }
        }
    }

    impl ProductAvailability for Catalog {
        fn is_in_stock(&self, sku: &str) -> bool {
            self.queries.fetch_add(1, Ordering::SeqCst);
            !self.out_of_stock.iter().any(|s| s == sku)
        }
    }

    fn item(sku: &str) -> OrderItem {
        let product = Product::new(
            ProductId::new(123),
            sku,
            "Beans",
            "Top of the line beans",
            dec!(1),
        )
        .unwrap();
        OrderItem::new(product, 2).unwrap()
    }

    fn order_of(skus: &[&str]) -> Order {
        skus.iter().fold(Order::new(), |order, sku| order.with_item(item(sku)))
    }

    #[test]
    fn order_items_unique_by_sku_are_valid() {
        assert!(has_unique_skus(&order_of(&["456", "789"])));
    }

    #[test]
    fn order_items_sharing_a_sku_are_invalid() {
        assert!(!has_unique_skus(&order_of(&["456", "456"])));
    }

    #[test]
    fn empty_order_is_unique_and_in_stock() {
        let catalog = Catalog::default();
        assert!(has_unique_skus(&Order::new()));
        assert!(validate_order(&Order::new(), &catalog).is_ok());
    }

    #[test]
    fn out_of_stock_sku_reports_stock_message() {
        let catalog = Catalog::without(&["789"]);
        let err = validate_order(&order_of(&["456", "789"]), &catalog).unwrap_err();
        assert_eq!(err.messages(), [NOT_IN_STOCK.to_string()]);
        assert_eq!(err.to_string(), NOT_IN_STOCK);
    }

    #[test]
    fn duplicate_sku_reports_uniqueness_message() {
        let catalog = Catalog::default();
        let err = validate_order(&order_of(&["456", "456"]), &catalog).unwrap_err();
        assert_eq!(err.messages(), [SKUS_NOT_UNIQUE.to_string()]);
        assert_eq!(err.message(), SKUS_NOT_UNIQUE);
    }

    #[test]
    fn both_failures_are_reported_stock_first() {
        let catalog = Catalog::without(&["456"]);
        let err = validate_order(&order_of(&["456", "456"]), &catalog).unwrap_err();
        assert_eq!(
            err.messages(),
            [NOT_IN_STOCK.to_string(), SKUS_NOT_UNIQUE.to_string()]
        );
        assert_eq!(err.message(), NOT_IN_STOCK);
    }

    #[test]
    fn every_line_is_queried() {
        let catalog = Catalog::without(&["A"]);
        let order = order_of(&["A", "B", "C"]);
        assert_eq!(out_of_stock_skus(&order, &catalog), vec!["A"]);
        assert_eq!(catalog.queries.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn single_message_error() {
        let err = ValidationError::single("nope");
        assert_eq!(err.message(), "nope");
        assert!(err.contains("nope"));
        assert!(ValidationError::from_messages(Vec::<String>::new()).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: distinct, in-stock SKUs always validate.
        #[test]
        fn distinct_in_stock_skus_are_valid(
            skus in prop::collection::hash_set("[A-Z0-9]{1,12}", 0..10)
        ) {
            let skus: Vec<&str> = skus.iter().map(String::as_str).collect();
            prop_assert!(validate_order(&order_of(&skus), &Catalog::default()).is_ok());
        }

        /// Property: a repeated SKU is always reported, whatever the stock says.
        #[test]
        fn duplicate_is_reported_regardless_of_stock(
            skus in prop::collection::vec("[A-Z0-9]{1,12}", 1..10),
            dup_index in any::<prop::sample::Index>(),
            out_of_stock in any::<bool>()
        ) {
            let mut skus: Vec<&str> = skus.iter().map(String::as_str).collect();
            let dup = skus[dup_index.index(skus.len())];
            skus.push(dup);

            let catalog = if out_of_stock { Catalog::without(&[dup]) } else { Catalog::default() };
            let err = validate_order(&order_of(&skus), &catalog).unwrap_err();
            prop_assert!(err.contains(SKUS_NOT_UNIQUE));
            prop_assert_eq!(err.contains(NOT_IN_STOCK), out_of_stock);
        }

        /// Property: validation is repeatable for an unchanged order.
        #[test]
        fn validation_is_repeatable(
            skus in prop::collection::vec("[A-C]", 0..6),
            missing in prop::collection::vec("[A-C]", 0..2)
        ) {
            let skus: Vec<&str> = skus.iter().map(String::as_str).collect();
            let missing: Vec<&str> = missing.iter().map(String::as_str).collect();
            let catalog = Catalog::without(&missing);
            let order = order_of(&skus);

            prop_assert_eq!(validate_order(&order, &catalog), validate_order(&order, &catalog));
        }
    }
}
