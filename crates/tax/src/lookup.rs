//! Tax rate lookup port.

use std::sync::Arc;

use orderentry_core::ServiceError;

use crate::entry::TaxEntry;

/// Resolves the tax entries that apply to a postal code within a country.
///
/// The returned order is meaningful to callers and must be stable; an empty
/// list means no tax applies.
pub trait TaxRateLookup: Send + Sync {
    fn tax_entries(&self, postal_code: &str, country: &str) -> Result<Vec<TaxEntry>, ServiceError>;
}

impl<T> TaxRateLookup for Arc<T>
where
    T: TaxRateLookup + ?Sized,
{
    fn tax_entries(&self, postal_code: &str, country: &str) -> Result<Vec<TaxEntry>, ServiceError> {
        (**self).tax_entries(postal_code, country)
    }
}

impl<T> TaxRateLookup for &T
where
    T: TaxRateLookup + ?Sized,
{
    fn tax_entries(&self, postal_code: &str, country: &str) -> Result<Vec<TaxEntry>, ServiceError> {
        (**self).tax_entries(postal_code, country)
    }
}
