//! Invalid affix-pair detection.
//!
//! Some (prefix, suffix) combinations are linguistically impossible in
//! Indonesian. A word still carrying such a pair must not have its prefix
//! stripped, even when the stripped form happens to be in the dictionary —
//! the engine uses this as a pruning step.

/// Forbidden (prefix, suffix) combinations.
const FORBIDDEN_PAIRS: [(&str, &str); 7] = [
    ("ber", "i"),
    ("di", "an"),
    ("ke", "i"),
    ("ke", "kan"),
    ("me", "an"),
    ("ter", "an"),
    ("per", "an"),
];

/// Returns `true` if `word` carries a forbidden (prefix, suffix) pair.
///
/// The pair is identified by leading/trailing pattern matching on the word
/// itself, not by any engine state. Two exceptions: `me-…-kan` is always a
/// legal combination, and the lexicalized word `ketahui` is allowed.
pub fn contains_invalid_affix_pair(word: &str) -> bool {
    if word.starts_with("me") && word.ends_with("kan") {
        return false;
    }
    if word == "ketahui" {
        return false;
    }
    FORBIDDEN_PAIRS.iter().any(|(prefix, suffix)| {
        // A nonempty stem must remain between the prefix and suffix
        word.len() > prefix.len() + suffix.len()
            && word.starts_with(prefix)
            && word.ends_with(suffix)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_pairs_detected() {
        assert!(contains_invalid_affix_pair("berjatuhi")); // ber-i
        assert!(contains_invalid_affix_pair("dipukulan")); // di-an
        assert!(contains_invalid_affix_pair("ketiduri")); // ke-i
        assert!(contains_invalid_affix_pair("ketidurkan")); // ke-kan
        assert!(contains_invalid_affix_pair("menduaan")); // me-an
        assert!(contains_invalid_affix_pair("terduaan")); // ter-an
        assert!(contains_invalid_affix_pair("perkataan")); // per-an
    }

    #[test]
    fn test_legal_combinations_pass() {
        assert!(!contains_invalid_affix_pair("memberikan")); // me-...-kan
        assert!(!contains_invalid_affix_pair("ketahui")); // lexicalized
        assert!(!contains_invalid_affix_pair("penjualan"));
        assert!(!contains_invalid_affix_pair("nilai"));
    }

    #[test]
    fn test_bare_roots_are_not_pairs() {
        // No stem left between prefix and suffix
        assert!(!contains_invalid_affix_pair("beri"));
        assert!(!contains_invalid_affix_pair("dian"));
        assert!(!contains_invalid_affix_pair(""));
    }
}
