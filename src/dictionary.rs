//! The dictionary oracle the engine validates candidate roots against.
//!
//! The engine only needs membership lookups plus an idempotent `add`;
//! underlying storage is the caller's business. [`SetDictionary`] is the
//! default in-memory implementation.

use std::io::{self, BufRead};

use rustc_hash::FxHashSet;

/// Word-membership oracle consulted during stemming.
///
/// The engine only reads during a `stem` call; callers may `add` words
/// between calls. When a dictionary is shared across threads, reads must be
/// synchronized externally (or use a per-thread copy).
pub trait Dictionary {
    /// Returns `true` if `word` is a known root word.
    fn contains(&self, word: &str) -> bool;

    /// Add a root word. Adding a word that is already present is a no-op.
    fn add(&mut self, word: &str);
}

/// In-memory dictionary backed by a hash set.
#[derive(Debug, Clone, Default)]
pub struct SetDictionary {
    words: FxHashSet<String>,
}

impl SetDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary from a word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a dictionary from a word-per-line reader.
    ///
    /// Lines are trimmed; empty lines are skipped. Words are expected to be
    /// lowercase already (normalization happens upstream).
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(Self { words })
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for SetDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn add(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }
}

impl FromIterator<String> for SetDictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_and_contains() {
        let dict = SetDictionary::from_list(&["beri", "ajar"]);
        assert!(dict.contains("beri"));
        assert!(dict.contains("ajar"));
        assert!(!dict.contains("nilai"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut dict = SetDictionary::new();
        assert!(dict.is_empty());
        dict.add("nilai");
        dict.add("nilai");
        assert!(dict.contains("nilai"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let input = "beri\n\n  ajar  \nmakan\n";
        let dict = SetDictionary::from_reader(input.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("ajar"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_from_iterator() {
        let dict: SetDictionary = ["satu", "dua"].iter().map(|w| w.to_string()).collect();
        assert!(dict.contains("satu"));
        assert!(dict.contains("dua"));
    }
}
