//! Sub-score calculations
//!
//! Every function here returns a value in `[0, 1]` and is total over its
//! input; empty strings map to fixed neutral scores instead of dividing by zero.

use std::collections::HashSet;

use super::similarity::similarity_ratio;
use super::stop_words::StopWords;
use crate::utils::{
    MIN_KEYWORD_CHARS, NEUTRAL_SCORE, SIMILARITY_PREFIX_CHARS, char_len, is_word_separator,
    safe_truncate_chars,
};

/// Distinct keywords of a normalized description
///
/// Whitespace tokens longer than [`MIN_KEYWORD_CHARS`] characters that are not stop words.
/// Runs of separators yield empty tokens, which the length filter drops.
pub fn extract_keywords<'a>(description: &'a str, stop_words: &StopWords) -> HashSet<&'a str> {
    description
        .split(is_word_separator)
        .filter(|w| char_len(w) > MIN_KEYWORD_CHARS && !stop_words.contains(w))
        .collect()
}

/// Share of description keywords found anywhere in the content
///
/// Containment is a plain substring test, so "курс" also matches inside
/// "курсы". Both inputs are expected to be normalized already.
pub fn keywords_score(description: &str, content: &str, stop_words: &StopWords) -> f64 {
    let keywords = extract_keywords(description, stop_words);
    if keywords.is_empty() {
        return NEUTRAL_SCORE;
    }
    let matches = keywords.iter().filter(|w| content.contains(**w)).count();
    matches as f64 / keywords.len() as f64
}

/// Block similarity of the leading characters of both normalized strings
pub fn similarity_score(description: &str, content: &str) -> f64 {
    similarity_ratio(
        safe_truncate_chars(description, SIMILARITY_PREFIX_CHARS),
        safe_truncate_chars(content, SIMILARITY_PREFIX_CHARS),
    )
}

/// Adequacy of the description's own length, in characters
pub fn description_length_score(desc_len: usize) -> f64 {
    match desc_len {
        0..30 => 0.3,
        30..50 => 0.5,
        50..200 => 1.0,
        200..500 => 0.8,
        _ => 0.5,
    }
}

/// Adequacy of the description relative to the page size
pub fn length_ratio_score(desc_len: usize, content_len: usize) -> f64 {
    if content_len == 0 {
        return NEUTRAL_SCORE;
    }
    let ratio = desc_len as f64 / content_len as f64;
    if ratio < 0.05 {
        1.0
    } else if ratio < 0.1 {
        0.8
    } else {
        0.5
    }
}

/// Mean of the absolute and relative length scores, on the strings as given
pub fn length_score(description: &str, content: &str) -> f64 {
    let desc_len = char_len(description);
    let content_len = char_len(content);
    (description_length_score(desc_len) + length_ratio_score(desc_len, content_len)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_is_neutral() {
        let sw = StopWords::russian();
        assert_eq!(keywords_score("", "anything", &sw), 0.5);
        assert_eq!(keywords_score("", "", &sw), 0.5);
    }

    #[test]
    fn only_short_or_stop_words_is_neutral() {
        let sw = StopWords::russian();
        assert_eq!(keywords_score("и в на для это", "content", &sw), 0.5);
        assert_eq!(keywords_score("является", "content", &sw), 0.5);
    }

    #[test]
    fn keyword_fraction() {
        let sw = StopWords::russian();
        let score = keywords_score("открытых дверей факультета", "день открытых дверей", &sw);
        assert!((score - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn keywords_are_deduplicated() {
        let sw = StopWords::none();
        // {"open", "house"}: one of two distinct keywords matches
        let score = keywords_score("open open open house", "open day", &sw);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn keyword_match_is_substring_containment() {
        let sw = StopWords::none();
        assert_eq!(keywords_score("курс", "подготовительные курсы", &sw), 1.0);
    }

    #[test]
    fn information_separators_split_keywords() {
        let sw = StopWords::none();
        let kws = extract_keywords("курсы\x1fолимпиада\x1c\x1dлекции", &sw);
        assert_eq!(kws.len(), 3);
        assert!(kws.contains("олимпиада"));
        assert!(kws.contains("лекции"));
        assert!(!kws.contains(""));
    }

    #[test]
    fn keyword_length_counts_characters() {
        // "курс" is 4 chars (8 bytes); "дом" is 3 chars and is dropped
        let sw = StopWords::none();
        let kws = extract_keywords("курс дом", &sw);
        assert_eq!(kws.len(), 1);
        assert!(kws.contains("курс"));
    }

    #[test]
    fn identical_prefixes_score_one() {
        let long = "a".repeat(800);
        let other = format!("{}{}", "a".repeat(500), "b".repeat(300));
        assert_eq!(similarity_score(&long, &other), 1.0);
        assert_eq!(similarity_score("same text", "same text"), 1.0);
    }

    #[test]
    fn description_length_breakpoints() {
        assert_eq!(description_length_score(25), 0.3);
        assert_eq!(description_length_score(40), 0.5);
        assert_eq!(description_length_score(100), 1.0);
        assert_eq!(description_length_score(300), 0.8);
        assert_eq!(description_length_score(600), 0.5);
        assert_eq!(description_length_score(0), 0.3);
        assert_eq!(description_length_score(29), 0.3);
        assert_eq!(description_length_score(30), 0.5);
        assert_eq!(description_length_score(50), 1.0);
        assert_eq!(description_length_score(200), 0.8);
        assert_eq!(description_length_score(500), 0.5);
    }

    #[test]
    fn ratio_breakpoints() {
        assert_eq!(length_ratio_score(10, 0), 0.5);
        assert_eq!(length_ratio_score(4, 100), 1.0);
        assert_eq!(length_ratio_score(5, 100), 0.8);
        assert_eq!(length_ratio_score(9, 100), 0.8);
        assert_eq!(length_ratio_score(10, 100), 0.5);
        assert_eq!(length_ratio_score(0, 100), 1.0);
    }

    #[test]
    fn length_score_is_mean() {
        let desc = "x".repeat(100);
        let content = "y".repeat(10_000);
        assert_eq!(length_score(&desc, &content), 1.0);
        assert_eq!(length_score("", ""), 0.4);
    }
}
