//! Stock availability port.

use std::sync::Arc;

/// Answers whether a SKU can currently be sold.
///
/// Implemented by the catalog/inventory backend. The order workflow treats the
/// answer as authoritative and performs no reservation.
pub trait ProductAvailability: Send + Sync {
    fn is_in_stock(&self, sku: &str) -> bool;
}

impl<P> ProductAvailability for Arc<P>
where
    P: ProductAvailability + ?Sized,
{
    fn is_in_stock(&self, sku: &str) -> bool {
        (**self).is_in_stock(sku)
    }
}

impl<P> ProductAvailability for &P
where
    P: ProductAvailability + ?Sized,
{
    fn is_in_stock(&self, sku: &str) -> bool {
        (**self).is_in_stock(sku)
    }
}
