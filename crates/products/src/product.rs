use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::{DomainError, DomainResult, Entity, int_id};

int_id! {
    /// Catalog identifier of a product.
    pub struct ProductId(i64);
}

/// Catalog product, immutable once loaded.
///
/// The SKU is the business identity used by stock checks and order-line
/// uniqueness; `id` is the catalog's internal key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    description: String,
    /// Unit price, exact decimal.
    price: Decimal,
}

impl Product {
    /// Build a product record.
    ///
    /// Rejects a blank SKU and a negative price. The SKU is stored trimmed.
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
    ) -> DomainResult<Self> {
        let sku: String = sku.into();
        let sku = sku.trim();
        if sku.is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "price cannot be negative (sku {sku}: {price})"
            )));
        }

        Ok(Self {
            id,
            sku: sku.to_string(),
            name: name.into(),
            description: description.into(),
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
