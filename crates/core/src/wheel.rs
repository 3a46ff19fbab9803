//! Spin-the-Wheel
//!
//! Configuration of the customer-facing prize wheel. Each segment carries a
//! label, an optional promotion code awarded when it is hit and a win
//! probability in percent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found when checking a wheel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelConfigError {
    /// Fewer than two segments.
    #[error("the wheel needs at least two segments, found {0}")]
    TooFewSegments(usize),

    /// A segment has a blank label.
    #[error("segment {0} has no label")]
    MissingLabel(usize),

    /// A segment probability is outside `(0, 100]`.
    #[error("segment {index} has probability {probability}%, expected more than 0 and at most 100")]
    InvalidProbability {
        /// Segment position
        index: usize,

        /// Offending probability
        probability: Decimal,
    },

    /// Probabilities do not add up to 100.
    #[error("segment probabilities add up to {0}%, expected 100%")]
    ProbabilityTotal(Decimal),
}

/// One slice of the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSegment {
    /// Text shown on the slice
    pub label: String,

    /// Promotion code awarded, if the slice wins anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,

    /// Chance of landing on this slice, in percent
    #[serde(with = "rust_decimal::serde::float")]
    pub probability: Decimal,
}

/// Wheel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelConfig {
    /// Whether customers can spin
    pub enabled: bool,

    /// Slices in display order
    pub segments: Vec<WheelSegment>,
}

impl WheelConfig {
    /// Check the configuration before it is saved.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in segment order, before checking the
    /// probability total.
    pub fn validate(&self) -> Result<(), WheelConfigError> {
        if self.segments.len() < 2 {
            return Err(WheelConfigError::TooFewSegments(self.segments.len()));
        }

        let mut total = Decimal::ZERO;

        for (index, segment) in self.segments.iter().enumerate() {
            if segment.label.trim().is_empty() {
                return Err(WheelConfigError::MissingLabel(index));
            }

            if segment.probability <= Decimal::ZERO || segment.probability > Decimal::ONE_HUNDRED {
                return Err(WheelConfigError::InvalidProbability {
                    index,
                    probability: segment.probability,
                });
            }

            total += segment.probability;
        }

        if total != Decimal::ONE_HUNDRED {
            return Err(WheelConfigError::ProbabilityTotal(total));
        }

        Ok(())
    }
}
