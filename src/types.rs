//! Core types: rule identifiers, stemming results, and engine configuration.

use serde::{Deserialize, Serialize};

// ─── Rule identifiers ───────────────────────────────────────────────────────

/// Stable identifier for a single affix-removal rule.
///
/// A [`StemResult`] records the rules that fired, in application order.
/// Replaying that sequence over the original input reproduces the root
/// exactly — every rule is a pure function of its input word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Trailing `lah|kah|tah|pun`.
    Particle,
    /// Trailing `ku|mu|nya`.
    PossessivePronoun,
    /// Trailing `kan|an|i`.
    DerivationalSuffix,
    /// Leading `di|ke|se`.
    PlainPrefix,
    Prefix1a,
    Prefix1b,
    Prefix2,
    Prefix3,
    Prefix4,
    Prefix5,
    Prefix6a,
    Prefix6b,
    Prefix7,
    Prefix8,
    Prefix9,
    Prefix10,
    Prefix11,
    Prefix12,
    Prefix13,
    Prefix14,
    Prefix15,
    Prefix16,
}

impl RuleId {
    /// Returns the user-facing name used in JSON and trace output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Particle => "particle",
            Self::PossessivePronoun => "possessive_pronoun",
            Self::DerivationalSuffix => "derivational_suffix",
            Self::PlainPrefix => "plain_prefix",
            Self::Prefix1a => "prefix1a",
            Self::Prefix1b => "prefix1b",
            Self::Prefix2 => "prefix2",
            Self::Prefix3 => "prefix3",
            Self::Prefix4 => "prefix4",
            Self::Prefix5 => "prefix5",
            Self::Prefix6a => "prefix6a",
            Self::Prefix6b => "prefix6b",
            Self::Prefix7 => "prefix7",
            Self::Prefix8 => "prefix8",
            Self::Prefix9 => "prefix9",
            Self::Prefix10 => "prefix10",
            Self::Prefix11 => "prefix11",
            Self::Prefix12 => "prefix12",
            Self::Prefix13 => "prefix13",
            Self::Prefix14 => "prefix14",
            Self::Prefix15 => "prefix15",
            Self::Prefix16 => "prefix16",
        }
    }
}

// ─── Results ────────────────────────────────────────────────────────────────

/// The outcome of stemming one word: the root plus the rules that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemResult {
    /// The final root (dictionary-validated, or a best-effort stripped form).
    pub root: String,
    /// Rule identifiers in application order. Empty when the word was
    /// returned unchanged (short word, or an immediate dictionary hit).
    pub trace: Vec<RuleId>,
}

impl StemResult {
    pub fn new(root: String, trace: Vec<RuleId>) -> Self {
        Self { root, trace }
    }

    /// A result that leaves the input untouched.
    pub fn unchanged(word: &str) -> Self {
        Self {
            root: word.to_string(),
            trace: Vec::new(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn trace(&self) -> &[RuleId] {
        &self.trace
    }

    /// Consumes the result, returning just the root.
    pub fn into_root(self) -> String {
        self.root
    }
}

// ─── Configuration ──────────────────────────────────────────────────────────

/// What to return when no stripping path ever reaches a dictionary hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Return the most-stripped candidate (accepts overstemming over
    /// non-stemming — the behavior search indexing usually wants).
    #[default]
    MostStripped,
    /// Return the untouched input word.
    Original,
}

/// Configuration for the stemming engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemConfig {
    /// Maximum number of prefix-removal passes per word. Words can stack
    /// prefixes (e.g. `ke-ter-`), but the ceiling must stay fixed so every
    /// call terminates.
    pub max_prefix_passes: usize,
    /// Fallback policy when no candidate is found in the dictionary.
    pub fallback: FallbackPolicy,
}

impl Default for StemConfig {
    fn default() -> Self {
        Self {
            max_prefix_passes: 3,
            fallback: FallbackPolicy::MostStripped,
        }
    }
}

impl StemConfig {
    /// Set the maximum number of prefix-removal passes.
    pub fn with_max_prefix_passes(mut self, max_prefix_passes: usize) -> Self {
        self.max_prefix_passes = max_prefix_passes;
        self
    }

    /// Set the fallback policy.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}
