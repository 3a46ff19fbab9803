//! Display Formatter
//!
//! Human-readable labels for rules and actions in list and detail views.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::Currency;

use crate::{
    catalog::{ProductId, ProductLookup},
    promotions::{actions::Action, registry::RuleActionPair, rules::Rule},
};

/// Rendered labels for one promotion line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairLabels {
    /// Condition label
    pub rule: String,

    /// Effect label
    pub action: String,
}

/// Formats rules and actions, resolving product ids through a lookup.
#[derive(Debug)]
pub struct LabelFormatter<'a, L: ?Sized> {
    products: &'a L,
    currency: &'static Currency,
}

impl<'a, L: ProductLookup + ?Sized> LabelFormatter<'a, L> {
    /// Create a formatter rendering amounts in `currency`.
    pub const fn new(products: &'a L, currency: &'static Currency) -> Self {
        Self { products, currency }
    }

    /// Label for a rule.
    pub fn rule_label(&self, rule: &Rule) -> String {
        match rule {
            Rule::Product { product_id } => self.product_name(*product_id),
            Rule::Category { value } => value.names().join(", "),
            Rule::CartValue { minimum_cart_value } => minimum_cart_value.text().to_string(),
        }
    }

    /// Label for an action.
    pub fn action_label(&self, action: &Action) -> String {
        match action {
            Action::FixedOff { amount } => format_money(amount.value(), self.currency),
            Action::PercentOff { percentage } => format!("{}%", percentage.value().normalize()),
            Action::FreeItem {
                product_id,
                quantity,
            } => format!("{} (Quantity: {quantity})", self.product_name(*product_id)),
        }
    }

    /// Labels for a whole line.
    pub fn pair_labels(&self, pair: &RuleActionPair) -> PairLabels {
        PairLabels {
            rule: self.rule_label(pair.rule()),
            action: self.action_label(pair.action()),
        }
    }

    fn product_name(&self, id: ProductId) -> String {
        self.products
            .product_name(id)
            .map_or_else(|| id.to_string(), ToString::to_string)
    }
}

/// Format `amount` as currency symbol followed by the currency's minor digits,
/// e.g. `€5.00`.
pub fn format_money(amount: Decimal, currency: &Currency) -> String {
    let rounded =
        amount.round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{sign}{}{}",
        currency.symbol,
        minor_digits(rounded.abs(), currency.exponent)
    )
}

/// Decimal text padded with zeros to `exponent` fraction digits.
///
/// Precision formatting (`{:.3}`) overflows rust_decimal's buffer near
/// `Decimal::MAX`, so the padding is done here.
fn minor_digits(amount: Decimal, exponent: u32) -> String {
    let text = amount.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    if exponent == 0 {
        return whole.to_string();
    }

    let width = usize::try_from(exponent).unwrap_or(usize::MAX);
    let padding = width.saturating_sub(fraction.len());

    let mut digits = String::with_capacity(whole.len() + 1 + fraction.len() + padding);
    digits.push_str(whole);
    digits.push('.');
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', padding));

    digits
}
