//! Promotion Line Validation
//!
//! Gatekeeper for new rule/action pairs. Checks run in a fixed order and the
//! first failure is reported, so the user always sees the earliest field that
//! needs attention.

use thiserror::Error;

use crate::promotions::{
    actions::ActionType,
    codec::{ActionInput, RuleInput, decode_action, decode_rule},
    key::RuleKey,
    registry::RuleActionPair,
    rules::RuleType,
};

/// Reason a rule/action pair was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No rule type selected.
    #[error("You must choose where the discount applies.")]
    MissingRuleType,

    /// No action type selected.
    #[error("You must choose a discount type.")]
    MissingActionType,

    /// PRODUCT rule without a product.
    #[error("Please select a product for this condition.")]
    MissingProduct,

    /// PRODUCT rule with a product id that is not an integer.
    #[error("The selected product is not valid.")]
    InvalidProduct,

    /// CATEGORY rule without any category.
    #[error("Please select at least one category.")]
    MissingCategory,

    /// CART_VALUE rule without a threshold.
    #[error("Please enter a minimum cart value.")]
    MissingMinimumCartValue,

    /// CART_VALUE rule with a threshold that is not a non-negative number.
    #[error("The minimum cart value must be a non-negative number.")]
    InvalidMinimumCartValue,

    /// Another line already uses the same condition.
    #[error("A discount for this condition already exists ({0}).")]
    DuplicateCondition(RuleKey),

    /// FIXED_OFF action without an amount.
    #[error("Please enter the discount amount.")]
    MissingAmount,

    /// FIXED_OFF action with an amount that is not a non-negative number.
    #[error("The discount amount must be a non-negative number.")]
    InvalidAmount,

    /// PERCENT_OFF action without a percentage.
    #[error("Please enter the discount percentage.")]
    MissingPercentage,

    /// PERCENT_OFF action with a percentage that is not a number.
    #[error("The discount percentage must be a number.")]
    InvalidPercentage,

    /// PERCENT_OFF action outside `(0, 100)`.
    #[error("The discount percentage must be greater than 0 and less than 100.")]
    PercentageOutOfRange,

    /// FREE_ITEM action missing its quantity or product.
    #[error("Please enter both the free item quantity and product.")]
    MissingFreeItem,

    /// FREE_ITEM quantity that is not a positive integer.
    #[error("The free item quantity must be a positive whole number.")]
    InvalidQuantity,

    /// FREE_ITEM product id that is not an integer.
    #[error("The selected free item is not valid.")]
    InvalidFreeProduct,

    /// CATEGORY rule combined with a FREE_ITEM action.
    #[error("A free item cannot be offered on a category condition.")]
    CategoryFreeItem,
}

impl Rejection {
    /// Short alert title for the rejection.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingRuleType
            | Self::MissingActionType
            | Self::MissingProduct
            | Self::MissingCategory
            | Self::MissingMinimumCartValue
            | Self::MissingAmount
            | Self::MissingPercentage
            | Self::MissingFreeItem => "Missing information",
            Self::InvalidProduct
            | Self::InvalidMinimumCartValue
            | Self::InvalidAmount
            | Self::InvalidPercentage
            | Self::PercentageOutOfRange
            | Self::InvalidQuantity
            | Self::InvalidFreeProduct => "Invalid value",
            Self::DuplicateCondition(_) => "Duplicate condition",
            Self::CategoryFreeItem => "Invalid combination",
        }
    }

    /// Alert body for the rejection.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Validate raw inputs and build a pair.
///
/// `is_taken` reports whether a rule key is already used by the target
/// collection.
///
/// # Errors
///
/// Returns the first failing check:
/// 1. rule type selected
/// 2. action type selected
/// 3. rule fields for the selected rule type
/// 4. rule key not already taken
/// 5. action fields for the selected action type
/// 6. CATEGORY rules never pair with FREE_ITEM actions
pub fn validate<F>(
    rule: &RuleInput,
    action: &ActionInput,
    is_taken: F,
) -> Result<RuleActionPair, Rejection>
where
    F: Fn(&RuleKey) -> bool,
{
    let rule_type = rule.rule_type.ok_or(Rejection::MissingRuleType)?;
    let action_type = action.action_type.ok_or(Rejection::MissingActionType)?;

    let rule = decode_rule(rule_type, rule)?;
    let key = RuleKey::for_rule(&rule);

    if is_taken(&key) {
        return Err(Rejection::DuplicateCondition(key));
    }

    let action = decode_action(action_type, action)?;

    if !compatible(rule_type, action_type) {
        return Err(Rejection::CategoryFreeItem);
    }

    Ok(RuleActionPair::new(rule, action, key))
}

/// Whether a rule type may be paired with an action type.
#[must_use]
pub const fn compatible(rule_type: RuleType, action_type: ActionType) -> bool {
    !matches!(
        (rule_type, action_type),
        (RuleType::Category, ActionType::FreeItem)
    )
}
