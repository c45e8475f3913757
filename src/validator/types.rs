//! Validation verdict types

use serde::{Deserialize, Serialize, Serializer};

use crate::utils::{NEEDS_UPDATE_THRESHOLD, OK_THRESHOLD};

/// Tri-state verdict on a stored description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// Description matches the page well
    Ok,
    /// Description is partially off and should be refined
    NeedsUpdate,
    /// Description does not describe the page
    Mismatch,
}

impl ValidationStatus {
    /// Classify an unrounded combined score
    ///
    /// Both thresholds are exclusive on the upper status: 0.75 is
    /// `NeedsUpdate`, 0.50 is `Mismatch`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > OK_THRESHOLD {
            Self::Ok
        } else if score > NEEDS_UPDATE_THRESHOLD {
            Self::NeedsUpdate
        } else {
            Self::Mismatch
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NeedsUpdate => "NEEDS_UPDATE",
            Self::Mismatch => "MISMATCH",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to two decimals for presentation
///
/// Rounds the exact binary value, ties to even: 0.125 becomes 0.12 while
/// 0.675 (stored slightly above the tie) becomes 0.68.
#[inline]
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}

/// The three sub-scores, each in `[0, 1]`
///
/// Values are kept unrounded; serialization rounds to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    #[serde(serialize_with = "serialize_rounded")]
    pub keywords: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub similarity: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub length: f64,
}

/// Outcome of validating one description against page text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub resource_id: String,
    pub validation_status: ValidationStatus,
    /// Combined score; doubles as the reported certainty
    #[serde(serialize_with = "serialize_rounded")]
    pub confidence: f64,
    pub scores: Scores,
    pub current_description: String,
    /// Empty when the status is `OK`
    pub suggested_description: String,
    pub reasoning: String,
}

impl ValidationResult {
    /// Confidence as whole percent, the value quoted in `reasoning`
    #[must_use]
    pub fn percent(&self) -> String {
        format!("{:.0}", self.confidence * 100.0)
    }
}
