//! The stemming engine — sequences rule application, dictionary lookups,
//! and the backtracking policy.
//!
//! Control flow for one word:
//! 1. Words of length <= 3 and dictionary hits are returned unchanged.
//! 2. Suffix categories (particle, possessive pronoun, derivational suffix)
//!    are stripped eagerly in that order, with a dictionary check after each
//!    category. A miss keeps the reduced word as the working value.
//! 3. If the original word carries a forbidden (prefix, suffix) pair, the
//!    prefix branch is pruned and the pre-prefix-removal word stands.
//! 4. Otherwise prefixes are stripped one per pass — the plain `di|ke|se`
//!    strip first, else the first matching catalog rule — up to a fixed
//!    number of passes, with a dictionary check after each strip. The pass
//!    ceiling keeps stacked prefixes (`ke-ter-…`) reachable while
//!    guaranteeing termination.
//! 5. Without a dictionary hit anywhere, the configured [`FallbackPolicy`]
//!    decides between the most-stripped candidate and the original input.
//!
//! Every path is total: "no rule matched" and "no dictionary hit" are normal
//! outcomes, never errors.

use rayon::prelude::*;

use crate::affix::pairs::contains_invalid_affix_pair;
use crate::affix::prefix::{first_matching_rule, remove_plain_prefix};
use crate::affix::suffix::{
    remove_derivational_suffix, remove_inflectional_particle,
    remove_inflectional_possessive_pronoun,
};
use crate::dictionary::Dictionary;
use crate::types::{FallbackPolicy, RuleId, StemConfig, StemResult};

/// Suffix categories in engine order.
const SUFFIX_STEPS: [(RuleId, fn(&str) -> String); 3] = [
    (RuleId::Particle, remove_inflectional_particle),
    (RuleId::PossessivePronoun, remove_inflectional_possessive_pronoun),
    (RuleId::DerivationalSuffix, remove_derivational_suffix),
];

/// The stemming engine, generic over the dictionary oracle.
///
/// The engine itself is stateless across calls; all per-word state lives on
/// the stack of a single `stem` invocation, so `&self` calls may run
/// concurrently when the dictionary allows shared reads.
#[derive(Debug, Clone)]
pub struct Stemmer<D> {
    dictionary: D,
    config: StemConfig,
}

impl<D: Dictionary> Stemmer<D> {
    /// Create a stemmer with the default configuration.
    pub fn new(dictionary: D) -> Self {
        Self::with_config(dictionary, StemConfig::default())
    }

    /// Create a stemmer with an explicit configuration.
    pub fn with_config(dictionary: D, config: StemConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Mutable access, e.g. to `add` roots between stemming calls.
    pub fn dictionary_mut(&mut self) -> &mut D {
        &mut self.dictionary
    }

    pub fn config(&self) -> &StemConfig {
        &self.config
    }

    /// Stem one normalized word, returning just the root.
    pub fn stem(&self, word: &str) -> String {
        self.stem_detailed(word).into_root()
    }

    /// Stem one normalized word, returning the root and the applied-rule
    /// trace.
    pub fn stem_detailed(&self, word: &str) -> StemResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("stem", word).entered();

        if word.chars().count() <= 3 {
            return StemResult::unchanged(word);
        }
        if self.dictionary.contains(word) {
            return StemResult::unchanged(word);
        }

        let mut trace = Vec::new();
        let mut current = word.to_string();

        // Suffixes are stripped eagerly: the reduced word stays the working
        // value even when the dictionary lookup misses.
        for (id, remove) in SUFFIX_STEPS {
            let stripped = remove(&current);
            if stripped != current {
                trace.push(id);
                current = stripped;
                if self.dictionary.contains(&current) {
                    return StemResult::new(current, trace);
                }
            }
        }

        // A forbidden pair is judged on the original word, so the check is
        // invariant across prefix passes; pruning here discards the whole
        // prefix branch and keeps the pre-prefix-removal word.
        if contains_invalid_affix_pair(word) {
            return StemResult::new(current, trace);
        }

        for _ in 0..self.config.max_prefix_passes {
            let Some((id, stripped)) = strip_one_prefix(&current) else {
                break;
            };
            trace.push(id);
            current = stripped;
            if self.dictionary.contains(&current) {
                return StemResult::new(current, trace);
            }
        }

        match self.config.fallback {
            FallbackPolicy::MostStripped => StemResult::new(current, trace),
            FallbackPolicy::Original => StemResult::unchanged(word),
        }
    }
}

impl<D: Dictionary + Sync> Stemmer<D> {
    /// Stem a batch of pre-tokenized words in parallel.
    pub fn stem_all(&self, words: &[&str]) -> Vec<String> {
        words.par_iter().map(|word| self.stem(word)).collect()
    }
}

/// One prefix strip: the plain `di|ke|se` removal when it applies, otherwise
/// the first matching catalog rule.
fn strip_one_prefix(word: &str) -> Option<(RuleId, String)> {
    let plain = remove_plain_prefix(word);
    if plain != word {
        return Some((RuleId::PlainPrefix, plain));
    }
    first_matching_rule(word)
}
