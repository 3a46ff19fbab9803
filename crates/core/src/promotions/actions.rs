//! Promotion Actions
//!
//! An action is the effect applied when a rule matches: a percentage off, a
//! fixed amount off or a free item.

use std::{fmt, num::NonZeroU32};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{catalog::ProductId, promotions::UnknownTypeError};

/// Action type discriminant, as selected in the "discount type" picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Percentage off the matched price.
    PercentOff,

    /// Fixed amount off the matched price.
    FixedOff,

    /// A product given away for free.
    FreeItem,
}

impl ActionType {
    /// Wire name of the action type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PercentOff => "PERCENT_OFF",
            Self::FixedOff => "FIXED_OFF",
            Self::FreeItem => "FREE_ITEM",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERCENT_OFF" => Ok(Self::PercentOff),
            "FIXED_OFF" => Ok(Self::FixedOff),
            "FREE_ITEM" => Ok(Self::FreeItem),
            other => Err(UnknownTypeError(other.to_string())),
        }
    }
}

/// Percentage strictly between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentOff(Decimal);

impl PercentOff {
    /// Wrap `value`, returning `None` unless `0 < value < 100`.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO && value < Decimal::ONE_HUNDRED).then_some(Self(value))
    }

    /// Percentage as a number between 0 and 100.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Serialize for PercentOff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for PercentOff {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;

        Self::new(value).ok_or_else(|| D::Error::custom("percentage must be between 0 and 100"))
    }
}

/// Non-negative fixed discount amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAmount(Decimal);

impl FixedAmount {
    /// Wrap `value`, returning `None` when it is negative.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (!value.is_sign_negative() || value.is_zero()).then_some(Self(value))
    }

    /// Amount in major currency units.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Serialize for FixedAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for FixedAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = rust_decimal::serde::float::deserialize(deserializer)?;

        Self::new(value).ok_or_else(|| D::Error::custom("amount must not be negative"))
    }
}

/// Promotion action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "actionType",
    content = "actionValue",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum Action {
    /// Take a percentage off (e.g., "10% off").
    PercentOff {
        /// Percentage in `(0, 100)`
        percentage: PercentOff,
    },

    /// Take a fixed amount off (e.g., "€5 off").
    FixedOff {
        /// Amount off
        amount: FixedAmount,
    },

    /// Give a product away (e.g., "2 free cookies").
    #[serde(rename_all = "camelCase")]
    FreeItem {
        /// Product given away
        product_id: ProductId,

        /// How many are given away
        quantity: NonZeroU32,
    },
}

impl Action {
    /// Return the action type discriminant.
    #[must_use]
    pub const fn action_type(&self) -> ActionType {
        match self {
            Self::PercentOff { .. } => ActionType::PercentOff,
            Self::FixedOff { .. } => ActionType::FixedOff,
            Self::FreeItem { .. } => ActionType::FreeItem,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_off_bounds_are_exclusive() {
        assert!(PercentOff::new(dec!(0)).is_none());
        assert!(PercentOff::new(dec!(100)).is_none());
        assert!(PercentOff::new(dec!(0.01)).is_some());
        assert!(PercentOff::new(dec!(99.99)).is_some());
    }

    #[test]
    fn fixed_amount_allows_zero_but_not_negative() {
        assert!(FixedAmount::new(dec!(0)).is_some());
        assert!(FixedAmount::new(dec!(-0.01)).is_none());
    }

    #[test]
    fn free_item_serializes_camel_case_fields() -> TestResult {
        let action = Action::FreeItem {
            product_id: ProductId::new(7),
            quantity: NonZeroU32::new(2).ok_or("zero quantity")?,
        };

        assert_eq!(
            serde_json::to_value(&action)?,
            json!({
                "actionType": "FREE_ITEM",
                "actionValue": { "productId": 7, "quantity": 2 }
            })
        );

        Ok(())
    }

    #[test]
    fn percent_off_serializes_number() -> TestResult {
        let action = Action::PercentOff {
            percentage: PercentOff::new(dec!(10)).ok_or("out of range")?,
        };

        assert_eq!(
            serde_json::to_value(&action)?,
            json!({ "actionType": "PERCENT_OFF", "actionValue": { "percentage": 10.0 } })
        );

        Ok(())
    }

    #[test]
    fn out_of_range_percentage_fails_to_deserialize() {
        let result = serde_json::from_value::<Action>(json!({
            "actionType": "PERCENT_OFF",
            "actionValue": { "percentage": 100 }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn zero_quantity_fails_to_deserialize() {
        let result = serde_json::from_value::<Action>(json!({
            "actionType": "FREE_ITEM",
            "actionValue": { "productId": 1, "quantity": 0 }
        }));

        assert!(result.is_err());
    }
}
