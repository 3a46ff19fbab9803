//! Rule Keys
//!
//! Deterministic string identifying a rule's condition. Two lines of the same
//! promotion may never share a key.

use std::fmt;

use crate::promotions::rules::Rule;

/// Duplicate-detection key derived from a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey(String);

impl RuleKey {
    /// Derive the key for `rule`.
    ///
    /// Category names are sorted before joining so selection order does not
    /// matter. Cart values key on the entered text, not the parsed amount.
    #[must_use]
    pub fn for_rule(rule: &Rule) -> Self {
        match rule {
            Rule::Product { product_id } => Self(format!("PRODUCT_{product_id}")),
            Rule::Category { value } => {
                let mut names: Vec<&str> = value.names().iter().map(String::as_str).collect();

                names.sort_unstable();

                Self(format!("CATEGORY_{}", names.join(",")))
            }
            Rule::CartValue { minimum_cart_value } => {
                Self(format!("CART_VALUE_{}", minimum_cart_value.text()))
            }
        }
    }

    /// Key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
