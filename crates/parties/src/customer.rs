use serde::{Deserialize, Serialize};

use orderentry_core::{Entity, int_id};

int_id! {
    /// Customer identifier issued by the customer directory.
    pub struct CustomerId(i64);
}

/// Customer record (read-only for order placement).
///
/// Only the fields needed to resolve a tax jurisdiction are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    postal_code: String,
    country: String,
}

impl Customer {
    pub fn new(id: CustomerId, postal_code: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
