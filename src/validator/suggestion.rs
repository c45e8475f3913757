//! Replacement suggestions and human-readable reasoning

use super::types::ValidationStatus;
use crate::utils::{
    SUGGESTION_MAX_CHARS, SUGGESTION_MIN_SENTENCE_CHARS, SUGGESTION_SOFT_LIMIT_CHARS,
    SUGGESTION_TARGET_CHARS, char_len, is_word_separator, safe_truncate_chars,
};

/// Build a replacement description from the leading sentences of the page
///
/// Returns an empty string for `OK`. Sentences are split on `.`, trimmed, and
/// kept when longer than 20 characters; collection stops at 100 characters and
/// the result is capped at 200. Falls back to `current` when no sentence
/// qualifies.
pub fn suggest_description(current: &str, content: &str, status: ValidationStatus) -> String {
    if status == ValidationStatus::Ok {
        return String::new();
    }

    let mut suggestion = String::new();
    let mut total_len = 0usize;

    for sentence in content.split('.') {
        let sentence = sentence.trim_matches(is_word_separator);
        let len = char_len(sentence);
        if len > SUGGESTION_MIN_SENTENCE_CHARS && total_len < SUGGESTION_SOFT_LIMIT_CHARS {
            suggestion.push_str(sentence);
            suggestion.push_str(". ");
            total_len += len;

            if total_len >= SUGGESTION_TARGET_CHARS {
                break;
            }
        }
    }

    if suggestion.is_empty() {
        current.to_string()
    } else {
        safe_truncate_chars(&suggestion, SUGGESTION_MAX_CHARS).to_string()
    }
}

/// Explain a verdict, quoting the score as a whole percent
pub fn reasoning(status: ValidationStatus, score: f64) -> String {
    let percent = score * 100.0;
    match status {
        ValidationStatus::Ok => {
            format!("Description matches site content well (match {percent:.0}%)")
        }
        ValidationStatus::NeedsUpdate => format!(
            "Description needs refinement. Match of {percent:.0}% indicates a partial mismatch"
        ),
        ValidationStatus::Mismatch => format!(
            "Description does not match site content. Rewrite required (match only {percent:.0}%)"
        ),
    }
}
