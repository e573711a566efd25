use std::collections::HashMap;
use std::sync::RwLock;

use orderentry_products::{Product, ProductAvailability};

#[derive(Debug, Clone)]
struct CatalogEntry {
    product: Product,
    on_hand: u32,
}

/// In-memory product catalog with stock levels, keyed by SKU.
///
/// Unknown SKUs are reported as out of stock.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    inner: RwLock<HashMap<String, CatalogEntry>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product and its stock level.
    pub fn upsert(&self, product: Product, on_hand: u32) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.sku().to_string(), CatalogEntry { product, on_hand });
        }
    }

    /// Update the stock level of a known SKU. Returns `false` for unknown SKUs.
    pub fn set_on_hand(&self, sku: &str, on_hand: u32) -> bool {
        match self.inner.write() {
            Ok(mut map) => match map.get_mut(sku) {
                Some(entry) => {
                    entry.on_hand = on_hand;
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    pub fn get(&self, sku: &str) -> Option<Product> {
        let map = self.inner.read().ok()?;
        map.get(sku).map(|e| e.product.clone())
    }

    pub fn on_hand(&self, sku: &str) -> Option<u32> {
        let map = self.inner.read().ok()?;
        map.get(sku).map(|e| e.on_hand)
    }
}

impl ProductAvailability for InMemoryProductCatalog {
    fn is_in_stock(&self, sku: &str) -> bool {
        self.on_hand(sku).is_some_and(|n| n > 0)
    }
}
