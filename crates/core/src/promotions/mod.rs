//! Promotions
//!
//! Authoring model for promotion lines. Raw form fields are decoded into
//! typed [`Rule`](rules::Rule) and [`Action`](actions::Action) values,
//! validated, collected in a [`PairRegistry`](registry::PairRegistry), rendered
//! for review and finally flattened into a
//! [`PromotionPayload`](draft::PromotionPayload).

use thiserror::Error;

pub mod actions;
pub mod codec;
pub mod display;
pub mod draft;
pub mod key;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod validation;

pub use validation::Rejection;

/// A rule or action type name that is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type: {0}")]
pub struct UnknownTypeError(pub String);
