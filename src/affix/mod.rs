//! Affix-removal rules, grouped by category.
//!
//! Every rule is a pure function over the input word. A failed precondition
//! means "no match", never an error — any string is a legal input, and
//! non-matching bytes (including non-ASCII) simply fail the pattern.

pub mod pairs;
pub mod prefix;
pub mod suffix;

/// Indonesian vowels, as ASCII bytes.
pub(crate) fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'i' | b'u' | b'e' | b'o')
}

pub(crate) fn is_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !is_vowel(b)
}

pub(crate) fn starts_with_vowel(s: &str) -> bool {
    s.as_bytes().first().is_some_and(|&b| is_vowel(b))
}

/// True when `word[start..]` begins with the literal `pat`.
///
/// Byte-level comparison; out-of-range offsets are a non-match, so callers
/// never need length guards.
pub(crate) fn has_at(word: &str, start: usize, pat: &str) -> bool {
    word.as_bytes().get(start..start + pat.len()) == Some(pat.as_bytes())
}
