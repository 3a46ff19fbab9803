//! Promotion Drafts
//!
//! The full promotion being authored, and the payload it is submitted as.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::promotions::{
    actions::Action,
    registry::{PairRegistry, RegistryError},
    rules::Rule,
};

/// Reasons a draft cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Name is blank.
    #[error("The promotion needs a name.")]
    MissingName,

    /// Code is blank.
    #[error("The promotion needs a code.")]
    MissingCode,

    /// End date is not after the start date.
    #[error("The promotion must end after it starts ({start} - {end}).")]
    InvalidSchedule {
        /// Start of the promotion
        start: Timestamp,

        /// End of the promotion
        end: Timestamp,
    },

    /// No rule/action lines.
    #[error("Add at least one discount before saving.")]
    NoPairs,
}

impl PayloadError {
    /// Short alert title for the error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingName | Self::MissingCode | Self::NoPairs => "Missing information",
            Self::InvalidSchedule { .. } => "Invalid dates",
        }
    }
}

/// Promotion being authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionDraft {
    /// Display name
    pub name: String,

    /// Code customers enter
    pub code: String,

    /// First instant the promotion applies
    pub start_date: Timestamp,

    /// Instant the promotion stops applying
    pub end_date: Timestamp,

    /// Whether the promotion is switched on
    pub is_active: bool,

    /// Rule/action lines
    pub pairs: PairRegistry,
}

impl PromotionDraft {
    /// Empty draft running between `start_date` and `end_date`.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        start_date: Timestamp,
        end_date: Timestamp,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            start_date,
            end_date,
            is_active: true,
            pairs: PairRegistry::new(),
        }
    }

    /// Build the submission payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the name or code is blank, the schedule is empty
    /// or reversed, or there are no lines.
    pub fn to_payload(&self) -> Result<PromotionPayload, PayloadError> {
        let name = self.name.trim();
        let code = self.code.trim();

        if name.is_empty() {
            return Err(PayloadError::MissingName);
        }

        if code.is_empty() {
            return Err(PayloadError::MissingCode);
        }

        if self.end_date <= self.start_date {
            return Err(PayloadError::InvalidSchedule {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.pairs.is_empty() {
            return Err(PayloadError::NoPairs);
        }

        Ok(PromotionPayload {
            name: name.to_string(),
            code: code.to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
            rules: self.pairs.rules().cloned().collect(),
            actions: self.pairs.actions().cloned().collect(),
        })
    }
}

impl TryFrom<PromotionPayload> for PromotionDraft {
    type Error = RegistryError;

    fn try_from(payload: PromotionPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            pairs: PairRegistry::from_parallel(payload.rules, payload.actions)?,
            name: payload.name,
            code: payload.code,
            start_date: payload.start_date,
            end_date: payload.end_date,
            is_active: payload.is_active,
        })
    }
}

/// Promotion as transmitted to and from the backend.
///
/// `rules` and `actions` are parallel arrays: entry `i` of each forms line `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPayload {
    /// Display name
    pub name: String,

    /// Code customers enter
    pub code: String,

    /// First instant the promotion applies
    pub start_date: Timestamp,

    /// Instant the promotion stops applying
    pub end_date: Timestamp,

    /// Whether the promotion is switched on
    pub is_active: bool,

    /// Line conditions
    pub rules: Vec<Rule>,

    /// Line effects
    pub actions: Vec<Action>,
}
