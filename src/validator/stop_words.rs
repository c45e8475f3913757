//! Stop words ignored by the keyword score
//!
//! The tracked resources are Russian-language university pages, so the default
//! set is Russian. Extra words can be loaded from a plain text file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

const RUSSIAN: &[&str] = &[
    "и", "в", "на", "с", "по", "из", "к", "о", "а", "е", "ы", "у", "я", "для", "как", "то", "это",
    "все", "она", "так", "его", "них", "были", "быть", "является",
];

/// Immutable set of lowercase stop words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::russian()
    }
}

impl StopWords {
    /// The built-in Russian set
    #[must_use]
    pub fn russian() -> Self {
        Self::from_words(RUSSIAN.iter().copied())
    }

    /// An empty set
    #[must_use]
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build from arbitrary words; words are trimmed and lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Add words to the set, consuming it
    #[must_use]
    pub fn extended<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(Self::from_words(words).words);
        self
    }

    /// Parse a word list: one word per line, blank lines and `#` comments ignored
    #[must_use]
    pub fn parse_list(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    /// Load a word list file and add its words to the set
    pub fn extended_from_file(self, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop words from {}", path.display()))?;
        let extra = Self::parse_list(&text);
        log::info!("Loaded {} extra stop words from {}", extra.len(), path.display());
        Ok(self.extended(extra))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_set_has_expected_words() {
        let sw = StopWords::russian();
        assert_eq!(sw.len(), 25);
        assert!(sw.contains("является"));
        assert!(sw.contains("для"));
        assert!(!sw.contains("университет"));
    }

    #[test]
    fn extension_lowercases_and_skips_blanks() {
        let sw = StopWords::none().extended(["  The ", "", "AND"]);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert_eq!(sw.len(), 2);
    }

    #[test]
    fn parse_list_skips_comments() {
        let words = StopWords::parse_list("# header\nfoo\n\n  bar  \n#baz\n");
        assert_eq!(words, vec!["foo", "bar"]);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stop.txt");
        std::fs::write(&path, "также\nтакже\nочень\n").unwrap();
        let sw = StopWords::russian().extended_from_file(&path).unwrap();
        assert_eq!(sw.len(), 27);
        assert!(sw.contains("очень"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = StopWords::russian().extended_from_file(Path::new("/nonexistent/stop.txt"));
        assert!(result.is_err());
    }
}
