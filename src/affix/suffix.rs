//! Suffix removal: inflectional particles, possessive pronouns, and
//! derivational suffixes.
//!
//! Each `remove_*` function strips at most one suffix and returns the word
//! unchanged when nothing matches. The engine applies them eagerly, one
//! category at a time, re-checking the dictionary between categories.

/// Inflectional particles: `-lah`, `-kah`, `-tah`, `-pun`.
const PARTICLES: [&str; 4] = ["lah", "kah", "tah", "pun"];

/// Inflectional possessive pronouns: `-ku`, `-mu`, `-nya`.
const POSSESSIVE_PRONOUNS: [&str; 3] = ["ku", "mu", "nya"];

/// Derivational suffixes, longest first so `-kan` wins over `-an` and `-an`
/// over `-i` (e.g. `membelikan` loses `kan`, not `an`).
const DERIVATIONAL_SUFFIXES: [&str; 3] = ["kan", "an", "i"];

/// Strip a trailing inflectional particle (`lah|kah|tah|pun`).
pub fn remove_inflectional_particle(word: &str) -> String {
    strip_first_suffix(word, &PARTICLES)
}

/// Strip a trailing possessive pronoun (`ku|mu|nya`).
pub fn remove_inflectional_possessive_pronoun(word: &str) -> String {
    strip_first_suffix(word, &POSSESSIVE_PRONOUNS)
}

/// Strip a trailing derivational suffix (`kan|an|i`).
pub fn remove_derivational_suffix(word: &str) -> String {
    strip_first_suffix(word, &DERIVATIONAL_SUFFIXES)
}

fn strip_first_suffix(word: &str, suffixes: &[&str]) -> String {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// The character-difference between a word before and after a rule fired.
///
/// Returns the removed suffix or prefix; when `after` is not an affix-strip
/// of `before`, falls back to removing the first occurrence of `after`
/// inside `before`. Reporting/audit only — never fed back into stemming.
pub fn removed_affix(before: &str, after: &str) -> String {
    if let Some(suffix) = before.strip_prefix(after) {
        return suffix.to_string();
    }
    if let Some(prefix) = before.strip_suffix(after) {
        return prefix.to_string();
    }
    before.replacen(after, "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_inflectional_particle() {
        assert_eq!(remove_inflectional_particle("dialah"), "dia");
        assert_eq!(remove_inflectional_particle("benarkah"), "benar");
        assert_eq!(remove_inflectional_particle("apatah"), "apa");
        assert_eq!(remove_inflectional_particle("siapapun"), "siapa");
    }

    #[test]
    fn test_remove_inflectional_particle_no_match() {
        assert_eq!(remove_inflectional_particle("makan"), "makan");
        assert_eq!(remove_inflectional_particle(""), "");
    }

    #[test]
    fn test_remove_inflectional_possessive_pronoun() {
        assert_eq!(remove_inflectional_possessive_pronoun("kemejaku"), "kemeja");
        assert_eq!(remove_inflectional_possessive_pronoun("bajumu"), "baju");
        assert_eq!(remove_inflectional_possessive_pronoun("celananya"), "celana");
    }

    #[test]
    fn test_remove_derivational_suffix() {
        assert_eq!(remove_derivational_suffix("menghantui"), "menghantu");
        assert_eq!(remove_derivational_suffix("membelikan"), "membeli");
        assert_eq!(remove_derivational_suffix("penjualan"), "penjual");
    }

    #[test]
    fn test_derivational_suffix_longest_wins() {
        // kan beats an, an beats i
        assert_eq!(remove_derivational_suffix("makankan"), "makan");
        assert_eq!(remove_derivational_suffix("pantai"), "panta");
    }

    #[test]
    fn test_removed_affix() {
        assert_eq!(removed_affix("menghantui", "menghantu"), "i");
        assert_eq!(removed_affix("membelikan", "membeli"), "kan");
        assert_eq!(removed_affix("penjualan", "penjual"), "an");
        // Prefix side
        assert_eq!(removed_affix("dibuang", "buang"), "di");
    }

    #[test]
    fn test_rules_are_deterministic() {
        let once = remove_derivational_suffix("penjualan");
        let twice = remove_derivational_suffix("penjualan");
        assert_eq!(once, twice);
    }
}
