use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderentry_core::ValueObject;

/// One tax applicable in a jurisdiction.
///
/// `rate` is a fraction: `0.15` means 15%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub description: String,
    pub rate: Decimal,
}

impl TaxEntry {
    pub fn new(description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            rate,
        }
    }
}

impl ValueObject for TaxEntry {}

/// Sum of all entry rates.
///
/// Rates are added, not compounded: a 10% and a 5% entry combine to 15%.
/// An empty slice yields zero; `None` if the sum overflows `Decimal`.
pub fn combined_rate(entries: &[TaxEntry]) -> Option<Decimal> {
    entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn combined_rate_adds_rates() {
        let entries = vec![
            TaxEntry::new("State", dec!(0.10)),
            TaxEntry::new("City", dec!(0.05)),
        ];
        assert_eq!(combined_rate(&entries), Some(dec!(0.15)));
    }

    #[test]
    fn combined_rate_of_nothing_is_zero() {
        assert_eq!(combined_rate(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn combined_rate_overflow_is_none() {
        let entries = vec![
            TaxEntry::new("A", Decimal::MAX),
            TaxEntry::new("B", Decimal::MAX),
        ];
        assert_eq!(combined_rate(&entries), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the combined rate does not depend on entry order.
        #[test]
        fn combined_rate_is_order_independent(
            basis_points in prop::collection::vec(0i64..10_000i64, 0..8)
        ) {
            let entries: Vec<TaxEntry> = basis_points
                .iter()
                .enumerate()
                .map(|(i, bp)| TaxEntry::new(format!("tax-{i}"), Decimal::new(*bp, 4)))
                .collect();
            let mut reversed = entries.clone();
            reversed.reverse();

            let expected: i64 = basis_points.iter().sum();
            prop_assert_eq!(combined_rate(&entries), Some(Decimal::new(expected, 4)));
            prop_assert_eq!(combined_rate(&entries), combined_rate(&reversed));
        }
    }
}
