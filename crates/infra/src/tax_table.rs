use std::collections::HashMap;
use std::sync::RwLock;

use orderentry_core::ServiceError;
use orderentry_tax::{TaxEntry, TaxRateLookup};

/// In-memory tax table keyed by `(postal code, country)`.
///
/// A jurisdiction with no configured entries has no tax (empty list).
#[derive(Debug, Default)]
pub struct InMemoryTaxTable {
    inner: RwLock<HashMap<(String, String), Vec<TaxEntry>>>,
}

impl InMemoryTaxTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entries for a jurisdiction. Order is kept as given.
    pub fn set_entries(&self, postal_code: &str, country: &str, entries: Vec<TaxEntry>) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((postal_code.to_string(), country.to_string()), entries);
        }
    }
}

impl TaxRateLookup for InMemoryTaxTable {
    fn tax_entries(&self, postal_code: &str, country: &str) -> Result<Vec<TaxEntry>, ServiceError> {
        let map = self
            .inner
            .read()
            .map_err(|_| ServiceError::unavailable("tax table lock poisoned"))?;
        Ok(map
            .get(&(postal_code.to_string(), country.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
