//! Item naming and quantity rules.

use serde::{Deserialize, Serialize};

use crate::error::{StockError, StockResult};
use crate::value_object::ValueObject;

/// Quantity held for an item. Unsigned, so it can never go negative.
pub type Quantity = u64;

/// Validated item name (non-empty once surrounding whitespace is ignored).
///
/// The name is kept verbatim; trimming is only used for the emptiness check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> StockResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(StockError::validation(format!("invalid item name: {raw:?}")));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = StockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert a signed quantity from the outer boundary into a [`Quantity`].
pub fn parse_quantity(qty: i64) -> StockResult<Quantity> {
    Quantity::try_from(qty).map_err(|_| StockError::validation(format!("invalid quantity: {qty}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        for raw in ["", "   ", "\t\n"] {
            let err = ItemName::parse(raw).unwrap_err();
            match err {
                StockError::Validation(_) => {}
                _ => panic!("Expected Validation error for {raw:?}"),
            }
        }
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = ItemName::parse(" apple ").unwrap();
        assert_eq!(name.as_str(), " apple ");
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert!(parse_quantity(-2).is_err());
        assert_eq!(parse_quantity(0).unwrap(), 0);
        assert_eq!(parse_quantity(10).unwrap(), 10);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any name with a visible character parses and round-trips.
            #[test]
            fn visible_names_parse(name in "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,30}") {
                let parsed = ItemName::parse(name.clone()).unwrap();
                prop_assert_eq!(parsed.into_inner(), name);
            }

            /// Property: non-negative quantities convert losslessly.
            #[test]
            fn non_negative_quantities_convert(qty in 0i64..=i64::MAX) {
                prop_assert_eq!(parse_quantity(qty).unwrap(), qty as u64);
            }
        }
    }
}
