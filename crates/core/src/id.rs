//! Integer identifier support.
//!
//! Identifiers in this system are issued by external services (catalog,
//! customer directory, fulfillment backend) as plain integers. Each bounded
//! context wraps them in its own newtype with [`int_id!`](crate::int_id) so
//! a customer id can never be passed where an order id is expected.

/// Declare a transparent integer identifier newtype.
///
/// The generated type is `Copy`, hashable, serde-transparent, displays as the
/// bare integer and parses from a decimal string (parse failures map to
/// [`DomainError::InvalidId`](crate::DomainError::InvalidId)). The calling
/// crate must depend on `serde`.
#[macro_export]
macro_rules! int_id {
    ($(#[$meta:meta])* $vis:vis struct $t:ident($inner:ty);) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $t(pub $inner);

        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::From<$inner> for $t {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$t> for $inner {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim()
                    .parse::<$inner>()
                    .map(Self)
                    .map_err(|e| {
                        $crate::DomainError::invalid_id(format!("{}: {}", stringify!($t), e))
                    })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::DomainError;

    crate::int_id! {
        /// Identifier used only by these tests.
        struct WidgetId(i64);
    }

    #[test]
    fn parses_and_displays_as_bare_integer() {
        let id: WidgetId = " 42 ".parse().unwrap();
        assert_eq!(id, WidgetId::new(42));
        assert_eq!(id.to_string(), "42");
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "abc".parse::<WidgetId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("WidgetId:")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&WidgetId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: WidgetId = serde_json::from_str("9").unwrap();
        assert_eq!(back, WidgetId::new(9));
    }
}
