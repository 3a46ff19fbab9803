//! Promotion authoring prelude.
//!
//! Everything an editor front-end needs to build, validate and render lines.

pub use crate::promotions::{
    Rejection, UnknownTypeError,
    actions::{Action, ActionType, FixedAmount, PercentOff},
    codec::{ActionInput, RuleInput},
    display::{LabelFormatter, PairLabels, format_money},
    draft::{PayloadError, PromotionDraft, PromotionPayload},
    key::RuleKey,
    registry::{PairRegistry, RegistryError, RuleActionPair},
    rules::{CartThreshold, CategorySelection, Rule, RuleType},
};
