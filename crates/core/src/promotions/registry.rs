//! Pair Registry
//!
//! Ordered, dense list of the rule/action lines of the promotion being
//! authored. Every insertion goes through validation, so key uniqueness and
//! the CATEGORY/FREE_ITEM exclusion hold after any mutation.

use thiserror::Error;

use crate::promotions::{
    Rejection,
    actions::Action,
    codec::{ActionInput, RuleInput},
    key::RuleKey,
    rules::Rule,
    validation::{compatible, validate},
};

/// A validated rule/action line.
///
/// Only validation constructs pairs, so a pair in hand always satisfies the
/// field and combination checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleActionPair {
    rule: Rule,
    action: Action,
    key: RuleKey,
}

impl RuleActionPair {
    pub(crate) const fn new(rule: Rule, action: Action, key: RuleKey) -> Self {
        Self { rule, action, key }
    }

    /// Condition of this line.
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Effect of this line.
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Duplicate-detection key of the rule.
    pub const fn key(&self) -> &RuleKey {
        &self.key
    }

    /// Raw form inputs that reproduce this pair.
    #[must_use]
    pub fn to_inputs(&self) -> (RuleInput, ActionInput) {
        (RuleInput::from(&self.rule), ActionInput::from(&self.action))
    }
}

/// Errors raised when rebuilding a registry from stored rules and actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The parallel arrays have different lengths.
    #[error("promotion has {rules} rules but {actions} actions")]
    LengthMismatch {
        /// Number of rules
        rules: usize,

        /// Number of actions
        actions: usize,
    },

    /// Two stored lines share a condition.
    #[error("promotion repeats the condition {0}")]
    DuplicateCondition(RuleKey),

    /// A stored line pairs a category rule with a free item.
    #[error("promotion line {0} pairs a category condition with a free item")]
    IncompatiblePair(usize),
}

/// Ordered collection of rule/action pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRegistry {
    pairs: Vec<RuleActionPair>,
}

impl PairRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from the index-aligned arrays of a stored promotion.
    ///
    /// # Errors
    ///
    /// Returns an error when the arrays differ in length, a condition repeats,
    /// or a category rule is paired with a free item.
    pub fn from_parallel(rules: Vec<Rule>, actions: Vec<Action>) -> Result<Self, RegistryError> {
        if rules.len() != actions.len() {
            return Err(RegistryError::LengthMismatch {
                rules: rules.len(),
                actions: actions.len(),
            });
        }

        let mut registry = Self::new();

        for (index, (rule, action)) in rules.into_iter().zip(actions).enumerate() {
            if !compatible(rule.rule_type(), action.action_type()) {
                return Err(RegistryError::IncompatiblePair(index));
            }

            let key = RuleKey::for_rule(&rule);

            if registry.contains_key(&key) {
                return Err(RegistryError::DuplicateCondition(key));
            }

            registry.pairs.push(RuleActionPair::new(rule, action, key));
        }

        Ok(registry)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Line at `index`.
    pub fn get(&self, index: usize) -> Option<&RuleActionPair> {
        self.pairs.get(index)
    }

    /// Lines in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &RuleActionPair> {
        self.pairs.iter()
    }

    /// Whether any line already uses `key`.
    pub fn contains_key(&self, key: &RuleKey) -> bool {
        self.pairs.iter().any(|pair| pair.key == *key)
    }

    /// Validate raw inputs against the current contents.
    ///
    /// # Errors
    ///
    /// Returns the first failed check; see [`validate`].
    pub fn validate(
        &self,
        rule: &RuleInput,
        action: &ActionInput,
    ) -> Result<RuleActionPair, Rejection> {
        validate(rule, action, |key| self.contains_key(key))
    }

    /// Append a validated pair and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::DuplicateCondition`] when the pair was validated
    /// against an earlier state and its key has since been taken.
    pub fn add(&mut self, pair: RuleActionPair) -> Result<usize, Rejection> {
        if self.contains_key(&pair.key) {
            return Err(Rejection::DuplicateCondition(pair.key));
        }

        self.pairs.push(pair);

        Ok(self.pairs.len() - 1)
    }

    /// Validate raw inputs and append the resulting pair.
    ///
    /// # Errors
    ///
    /// Returns the validation rejection; the registry is left unchanged.
    pub fn try_add(&mut self, rule: &RuleInput, action: &ActionInput) -> Result<usize, Rejection> {
        let pair = self.validate(rule, action)?;

        self.add(pair)
    }

    /// Remove the line at `index`, shifting later lines down.
    pub fn remove(&mut self, index: usize) -> Option<RuleActionPair> {
        if index >= self.pairs.len() {
            return None;
        }

        Some(self.pairs.remove(index))
    }

    /// Pull the line at `index` out for editing.
    ///
    /// The line leaves the registry and its values come back as form inputs;
    /// it returns only when the user re-submits it as a new line.
    pub fn edit_in_place(&mut self, index: usize) -> Option<(RuleInput, ActionInput)> {
        self.remove(index).map(|pair| pair.to_inputs())
    }

    /// Rules in line order, for the `rules` payload array.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.pairs.iter().map(RuleActionPair::rule)
    }

    /// Actions in line order, for the `actions` payload array.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.pairs.iter().map(RuleActionPair::action)
    }
}

impl<'a> IntoIterator for &'a PairRegistry {
    type Item = &'a RuleActionPair;
    type IntoIter = std::slice::Iter<'a, RuleActionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
