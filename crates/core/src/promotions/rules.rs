//! Promotion Rules
//!
//! A rule is the condition under which a promotion line applies: a single
//! product, one or more categories, or a minimum cart value.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use smallvec::{SmallVec, smallvec};

use crate::{catalog::ProductId, promotions::UnknownTypeError};

/// Rule type discriminant, as selected in the "applies to" picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// Applies to one product.
    Product,

    /// Applies to one or more categories.
    Category,

    /// Applies once the cart reaches a minimum value.
    CartValue,
}

impl RuleType {
    /// Wire name of the rule type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "PRODUCT",
            Self::Category => "CATEGORY",
            Self::CartValue => "CART_VALUE",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRODUCT" => Ok(Self::Product),
            "CATEGORY" => Ok(Self::Category),
            "CART_VALUE" => Ok(Self::CartValue),
            other => Err(UnknownTypeError(other.to_string())),
        }
    }
}

/// Non-empty list of category names.
///
/// Serialized as a bare string when a single category is selected and as an
/// array otherwise. Selection order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection(SmallVec<[String; 2]>);

impl CategorySelection {
    /// Build a selection, returning `None` when `names` is empty.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: SmallVec<[String; 2]> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return None;
        }

        Some(Self(names))
    }

    /// Selection with exactly one category.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self(smallvec![name.into()])
    }

    /// Category names in selection order.
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Serialize for CategorySelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [single] => serializer.serialize_str(single),
            names => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CategorySelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawSelection {
            One(String),
            Many(Vec<String>),
        }

        match RawSelection::deserialize(deserializer)? {
            RawSelection::One(name) => Ok(Self::single(name)),
            RawSelection::Many(names) => {
                Self::new(names).ok_or_else(|| D::Error::custom("category list is empty"))
            }
        }
    }
}

/// Minimum cart value as entered.
///
/// Keeps the entered text next to the parsed amount: duplicate detection keys
/// on the text, so `"50"` and `"50.0"` are distinct conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartThreshold {
    amount: Decimal,
    text: String,
}

impl CartThreshold {
    /// Parse a non-negative threshold from user input.
    pub fn parse(text: &str) -> Option<Self> {
        let amount = text.parse::<Decimal>().ok()?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return None;
        }

        Some(Self {
            amount,
            text: text.to_string(),
        })
    }

    /// Parsed amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Text as entered.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<Decimal> for CartThreshold {
    fn from(amount: Decimal) -> Self {
        Self {
            amount,
            text: amount.to_string(),
        }
    }
}

impl Serialize for CartThreshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.amount, serializer)
    }
}

impl<'de> Deserialize<'de> for CartThreshold {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(D::Error::custom("minimum cart value must not be negative"));
        }

        Ok(Self::from(amount))
    }
}

/// Promotion rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "ruleType",
    content = "ruleValue",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum Rule {
    /// Applies to a single product.
    #[serde(rename_all = "camelCase")]
    Product {
        /// Targeted product
        product_id: ProductId,
    },

    /// Applies to every product in the selected categories.
    Category {
        /// Selected category names
        value: CategorySelection,
    },

    /// Applies when the cart total reaches the threshold.
    #[serde(rename_all = "camelCase")]
    CartValue {
        /// Minimum cart total
        minimum_cart_value: CartThreshold,
    },
}

impl Rule {
    /// Return the rule type discriminant.
    #[must_use]
    pub const fn rule_type(&self) -> RuleType {
        match self {
            Self::Product { .. } => RuleType::Product,
            Self::Category { .. } => RuleType::Category,
            Self::CartValue { .. } => RuleType::CartValue,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rule_type_round_trips_through_wire_name() -> TestResult {
        for rule_type in [RuleType::Product, RuleType::Category, RuleType::CartValue] {
            assert_eq!(rule_type.as_str().parse::<RuleType>()?, rule_type);
        }

        assert!("product".parse::<RuleType>().is_err());

        Ok(())
    }

    #[test]
    fn product_rule_serializes_adjacently_tagged() -> TestResult {
        let rule = Rule::Product {
            product_id: ProductId::new(42),
        };

        assert_eq!(
            serde_json::to_value(&rule)?,
            json!({ "ruleType": "PRODUCT", "ruleValue": { "productId": 42 } })
        );

        Ok(())
    }

    #[test]
    fn single_category_serializes_as_string() -> TestResult {
        let rule = Rule::Category {
            value: CategorySelection::single("Drinks"),
        };

        assert_eq!(
            serde_json::to_value(&rule)?,
            json!({ "ruleType": "CATEGORY", "ruleValue": { "value": "Drinks" } })
        );

        Ok(())
    }

    #[test]
    fn multiple_categories_serialize_as_array_in_selection_order() -> TestResult {
        let value = CategorySelection::new(["Snacks", "Drinks"]).ok_or("empty selection")?;
        let rule = Rule::Category { value };

        assert_eq!(
            serde_json::to_value(&rule)?,
            json!({ "ruleType": "CATEGORY", "ruleValue": { "value": ["Snacks", "Drinks"] } })
        );

        Ok(())
    }

    #[test]
    fn category_selection_accepts_string_or_array() -> TestResult {
        let one: CategorySelection = serde_json::from_value(json!("Drinks"))?;
        let many: CategorySelection = serde_json::from_value(json!(["Drinks", "Snacks"]))?;

        assert_eq!(one.names(), ["Drinks"]);
        assert_eq!(many.names(), ["Drinks", "Snacks"]);
        assert!(serde_json::from_value::<CategorySelection>(json!([])).is_err());

        Ok(())
    }

    #[test]
    fn cart_value_rule_serializes_number() -> TestResult {
        let threshold = CartThreshold::parse("50").ok_or("invalid threshold")?;
        let rule = Rule::CartValue {
            minimum_cart_value: threshold,
        };

        assert_eq!(
            serde_json::to_value(&rule)?,
            json!({ "ruleType": "CART_VALUE", "ruleValue": { "minimumCartValue": 50.0 } })
        );

        Ok(())
    }

    #[test]
    fn cart_threshold_keeps_entered_text() -> TestResult {
        let plain = CartThreshold::parse("50").ok_or("invalid threshold")?;
        let padded = CartThreshold::parse("50.0").ok_or("invalid threshold")?;

        assert_eq!(plain.amount(), padded.amount());
        assert_eq!(plain.text(), "50");
        assert_eq!(padded.text(), "50.0");

        Ok(())
    }

    #[test]
    fn cart_threshold_rejects_negative_and_garbage() {
        assert!(CartThreshold::parse("-1").is_none());
        assert!(CartThreshold::parse("fifty").is_none());
        assert!(CartThreshold::parse("0").is_some());
    }

    #[test]
    fn rule_deserializes_from_backend_shape() -> TestResult {
        let rule: Rule = serde_json::from_value(json!({
            "ruleType": "CART_VALUE",
            "ruleValue": { "minimumCartValue": 25.5 }
        }))?;

        let Rule::CartValue { minimum_cart_value } = rule else {
            return Err("expected a cart value rule".into());
        };

        assert_eq!(minimum_cart_value.text(), "25.5");

        Ok(())
    }
}
