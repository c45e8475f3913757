//! UTF-8-safe string helpers
//!
//! All lengths in the scoring rules are counted in characters, not bytes, so
//! Cyrillic descriptions score the same as ASCII ones.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never panics on multi-byte characters.
///
/// # Examples
/// ```
/// # use kodegen_tools_resource_validator::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("День открытых дверей", 4), "День");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Word separator for tokenizing and trimming page text
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which some scraped pages carry between fields.
#[inline]
#[must_use]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Number of Unicode scalar values in `s`
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
