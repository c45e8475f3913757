//! Description validation
//!
//! Scores a stored resource description against the text of its web page and
//! classifies it as `OK`, `NEEDS_UPDATE` or `MISMATCH`.
//!
//! ## Scoring
//!
//! | Sub-score  | Weight | Input                                   |
//! |------------|--------|-----------------------------------------|
//! | keywords   | 0.4    | lowercased description and content      |
//! | similarity | 0.4    | first 500 chars of both, lowercased     |
//! | length     | 0.2    | original description and content        |
//!
//! The combined score is classified unrounded; rounding to two decimals only
//! happens when the result is serialized.
//!
//! The validator is a pure function of its inputs. A single instance can be
//! shared behind an `Arc` and called concurrently.

pub mod scoring;
pub mod similarity;
pub mod stop_words;
pub mod suggestion;
pub mod types;

pub use similarity::{SequenceMatcher, similarity_ratio};
pub use stop_words::StopWords;
pub use types::{Scores, ValidationResult, ValidationStatus, round2};

use crate::utils::{KEYWORDS_WEIGHT, LENGTH_WEIGHT, SIMILARITY_WEIGHT};

/// Combine the three sub-scores into the total
#[inline]
#[must_use]
pub fn combined_score(scores: &Scores) -> f64 {
    scores.keywords * KEYWORDS_WEIGHT
        + scores.similarity * SIMILARITY_WEIGHT
        + scores.length * LENGTH_WEIGHT
}

/// Scores resource descriptions against page content
#[derive(Debug, Clone, Default)]
pub struct ResourceValidator {
    stop_words: StopWords,
}

impl ResourceValidator {
    /// Validator with the default stop words
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    #[must_use]
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Compute the sub-scores without classifying
    #[must_use]
    pub fn score(&self, description: &str, content: &str) -> Scores {
        let desc_normalized = description.to_lowercase();
        let content_normalized = content.to_lowercase();

        Scores {
            keywords: scoring::keywords_score(&desc_normalized, &content_normalized, &self.stop_words),
            similarity: scoring::similarity_score(&desc_normalized, &content_normalized),
            length: scoring::length_score(description, content),
        }
    }

    /// Validate `current_description` against `webpage_content`
    #[must_use]
    pub fn validate(
        &self,
        resource_id: &str,
        current_description: &str,
        webpage_content: &str,
    ) -> ValidationResult {
        let scores = self.score(current_description, webpage_content);
        let total = combined_score(&scores);
        let status = ValidationStatus::from_score(total);

        log::info!("Validated {resource_id}: {status} (score: {total:.2})");
        log::debug!(
            "Scores for {resource_id}: keywords={:.3} similarity={:.3} length={:.3}",
            scores.keywords,
            scores.similarity,
            scores.length
        );

        ValidationResult {
            resource_id: resource_id.to_string(),
            validation_status: status,
            confidence: total,
            scores,
            current_description: current_description.to_string(),
            suggested_description: suggestion::suggest_description(
                current_description,
                webpage_content,
                status,
            ),
            reasoning: suggestion::reasoning(status, total),
        }
    }
}
