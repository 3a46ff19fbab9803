//! Rule/Action Value Codec
//!
//! Translates raw form fields into typed rules and actions, and back again
//! when a line is pulled out of the registry for editing.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{
    catalog::ProductId,
    promotions::{
        Rejection,
        actions::{Action, ActionType, FixedAmount, PercentOff},
        rules::{CartThreshold, CategorySelection, Rule, RuleType},
    },
};

/// Raw rule fields as collected by the editor form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleInput {
    /// Selected rule type, if any
    #[serde(rename = "type")]
    pub rule_type: Option<RuleType>,

    /// Product id, used by PRODUCT rules
    #[serde(deserialize_with = "raw_field")]
    pub product_id: String,

    /// Category names, used by CATEGORY rules
    pub categories: Vec<String>,

    /// Minimum cart value, used by CART_VALUE rules
    #[serde(deserialize_with = "raw_field")]
    pub min_cart_value: String,
}

impl RuleInput {
    /// PRODUCT rule input.
    pub fn product(product_id: impl Into<String>) -> Self {
        Self {
            rule_type: Some(RuleType::Product),
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    /// CATEGORY rule input.
    pub fn category<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rule_type: Some(RuleType::Category),
            categories: categories.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// CART_VALUE rule input.
    pub fn cart_value(min_cart_value: impl Into<String>) -> Self {
        Self {
            rule_type: Some(RuleType::CartValue),
            min_cart_value: min_cart_value.into(),
            ..Self::default()
        }
    }
}

impl From<&Rule> for RuleInput {
    fn from(rule: &Rule) -> Self {
        match rule {
            Rule::Product { product_id } => Self::product(product_id.to_string()),
            Rule::Category { value } => Self::category(value.names().iter().cloned()),
            Rule::CartValue { minimum_cart_value } => {
                Self::cart_value(minimum_cart_value.text())
            }
        }
    }
}

/// Raw action fields as collected by the editor form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionInput {
    /// Selected action type, if any
    #[serde(rename = "type")]
    pub action_type: Option<ActionType>,

    /// Amount off, used by FIXED_OFF actions
    #[serde(deserialize_with = "raw_field")]
    pub amount: String,

    /// Percentage off, used by PERCENT_OFF actions
    #[serde(deserialize_with = "raw_field")]
    pub percentage: String,

    /// Free item quantity, used by FREE_ITEM actions
    #[serde(deserialize_with = "raw_field")]
    pub quantity: String,

    /// Free item product id, used by FREE_ITEM actions
    #[serde(deserialize_with = "raw_field")]
    pub product_id: String,
}

impl ActionInput {
    /// FIXED_OFF action input.
    pub fn fixed_off(amount: impl Into<String>) -> Self {
        Self {
            action_type: Some(ActionType::FixedOff),
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// PERCENT_OFF action input.
    pub fn percent_off(percentage: impl Into<String>) -> Self {
        Self {
            action_type: Some(ActionType::PercentOff),
            percentage: percentage.into(),
            ..Self::default()
        }
    }

    /// FREE_ITEM action input.
    pub fn free_item(product_id: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            action_type: Some(ActionType::FreeItem),
            product_id: product_id.into(),
            quantity: quantity.into(),
            ..Self::default()
        }
    }
}

impl From<&Action> for ActionInput {
    fn from(action: &Action) -> Self {
        match action {
            Action::PercentOff { percentage } => Self::percent_off(percentage.value().to_string()),
            Action::FixedOff { amount } => Self::fixed_off(amount.value().to_string()),
            Action::FreeItem {
                product_id,
                quantity,
            } => Self::free_item(product_id.to_string(), quantity.to_string()),
        }
    }
}

/// Build a rule of `rule_type` from raw fields.
///
/// # Errors
///
/// Returns the rejection for the first missing or malformed field.
pub fn decode_rule(rule_type: RuleType, input: &RuleInput) -> Result<Rule, Rejection> {
    match rule_type {
        RuleType::Product => {
            let raw = present(&input.product_id).ok_or(Rejection::MissingProduct)?;
            let product_id = raw
                .parse::<ProductId>()
                .map_err(|_err| Rejection::InvalidProduct)?;

            Ok(Rule::Product { product_id })
        }
        RuleType::Category => {
            let names = input.categories.iter().filter_map(|name| present(name));
            let value = CategorySelection::new(names).ok_or(Rejection::MissingCategory)?;

            Ok(Rule::Category { value })
        }
        RuleType::CartValue => {
            let raw = present(&input.min_cart_value).ok_or(Rejection::MissingMinimumCartValue)?;
            let minimum_cart_value =
                CartThreshold::parse(raw).ok_or(Rejection::InvalidMinimumCartValue)?;

            Ok(Rule::CartValue { minimum_cart_value })
        }
    }
}

/// Build an action of `action_type` from raw fields.
///
/// # Errors
///
/// Returns the rejection for the first missing or malformed field.
pub fn decode_action(action_type: ActionType, input: &ActionInput) -> Result<Action, Rejection> {
    match action_type {
        ActionType::FixedOff => {
            let raw = present(&input.amount).ok_or(Rejection::MissingAmount)?;
            let amount = raw
                .parse::<Decimal>()
                .ok()
                .and_then(FixedAmount::new)
                .ok_or(Rejection::InvalidAmount)?;

            Ok(Action::FixedOff { amount })
        }
        ActionType::PercentOff => {
            let raw = present(&input.percentage).ok_or(Rejection::MissingPercentage)?;
            let value = raw
                .parse::<Decimal>()
                .map_err(|_err| Rejection::InvalidPercentage)?;
            let percentage = PercentOff::new(value).ok_or(Rejection::PercentageOutOfRange)?;

            Ok(Action::PercentOff { percentage })
        }
        ActionType::FreeItem => {
            let (Some(raw_quantity), Some(raw_product)) =
                (present(&input.quantity), present(&input.product_id))
            else {
                return Err(Rejection::MissingFreeItem);
            };

            let quantity = raw_quantity
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(Rejection::InvalidQuantity)?;

            let product_id = raw_product
                .parse::<ProductId>()
                .map_err(|_err| Rejection::InvalidFreeProduct)?;

            Ok(Action::FreeItem {
                product_id,
                quantity,
            })
        }
    }
}

fn present(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();

    (!trimmed.is_empty()).then_some(trimmed)
}

/// Accept strings or bare integers for form fields loaded from files.
///
/// Bare decimals are refused: going through `f64` loses the entered text,
/// which the cart value key depends on.
fn raw_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    match RawField::deserialize(deserializer)? {
        RawField::Text(text) => Ok(text),
        RawField::Unsigned(value) => Ok(value.to_string()),
        RawField::Signed(value) => Ok(value.to_string()),
        RawField::Float(value) => Err(de::Error::custom(format!(
            "decimal value {value} must be quoted to keep its exact text"
        ))),
    }
}
