//! Prefix removal: the plain `di|ke|se` strip and the complex
//! prefix-disambiguation rule catalog.
//!
//! The catalog implements the Nazief-Adriani rule family (1a-16) for the
//! `ber-`, `bel-`, `be-`, `ter-`, `te-`, `me-`, and `pe-` prefixes. Rules
//! are tried in ascending numeric order and the first rule whose
//! precondition matches wins; no further rule is attempted after a match.
//!
//! Notation in the rule docs: `V` = vowel, `C` = consonant, `P` = the tail
//! following the matched consonant (constrained not to equal `er` where
//! noted).

use crate::affix::{has_at, is_consonant, is_vowel, starts_with_vowel};
use crate::types::RuleId;

/// Plain prefixes, stripped unconditionally.
const PLAIN_PREFIXES: [&str; 3] = ["di", "ke", "se"];

/// Strip a leading plain prefix (`di|ke|se`).
pub fn remove_plain_prefix(word: &str) -> String {
    for prefix in PLAIN_PREFIXES {
        if let Some(stem) = word.strip_prefix(prefix) {
            return stem.to_string();
        }
    }
    word.to_string()
}

// ─── Rule catalog ───────────────────────────────────────────────────────────

/// One entry in the complex-prefix rule catalog.
#[derive(Clone, Copy)]
pub struct PrefixRule {
    pub id: RuleId,
    pub apply: fn(&str) -> Option<String>,
}

/// The catalog, in ascending numeric order. First match wins.
pub const PREFIX_RULES: [PrefixRule; 18] = [
    PrefixRule { id: RuleId::Prefix1a, apply: rule_1a },
    PrefixRule { id: RuleId::Prefix1b, apply: rule_1b },
    PrefixRule { id: RuleId::Prefix2, apply: rule_2 },
    PrefixRule { id: RuleId::Prefix3, apply: rule_3 },
    PrefixRule { id: RuleId::Prefix4, apply: rule_4 },
    PrefixRule { id: RuleId::Prefix5, apply: rule_5 },
    PrefixRule { id: RuleId::Prefix6a, apply: rule_6a },
    PrefixRule { id: RuleId::Prefix6b, apply: rule_6b },
    PrefixRule { id: RuleId::Prefix7, apply: rule_7 },
    PrefixRule { id: RuleId::Prefix8, apply: rule_8 },
    PrefixRule { id: RuleId::Prefix9, apply: rule_9 },
    PrefixRule { id: RuleId::Prefix10, apply: rule_10 },
    PrefixRule { id: RuleId::Prefix11, apply: rule_11 },
    PrefixRule { id: RuleId::Prefix12, apply: rule_12 },
    PrefixRule { id: RuleId::Prefix13, apply: rule_13 },
    PrefixRule { id: RuleId::Prefix14, apply: rule_14 },
    PrefixRule { id: RuleId::Prefix15, apply: rule_15 },
    PrefixRule { id: RuleId::Prefix16, apply: rule_16 },
];

/// Apply the catalog: the first matching rule's id and rewrite, if any.
pub fn first_matching_rule(word: &str) -> Option<(RuleId, String)> {
    PREFIX_RULES
        .iter()
        .find_map(|rule| (rule.apply)(word).map(|stem| (rule.id, stem)))
}

// ─── Individual rules ───────────────────────────────────────────────────────

/// Rule 1a: `berV` -> `ber-V`.
pub fn rule_1a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    starts_with_vowel(rest).then(|| rest.to_string())
}

/// Rule 1b: `berV` -> `be-rV`.
pub fn rule_1b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    starts_with_vowel(rest).then(|| format!("r{rest}"))
}

/// Rule 2: `berCVP` -> `ber-CVP` where C != `r` and P != `er`.
pub fn rule_2(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    let bytes = rest.as_bytes();
    let c = *bytes.first()?;
    let v = *bytes.get(1)?;
    if c == b'r' || !is_consonant(c) || !is_vowel(v) || has_at(rest, 2, "er") {
        return None;
    }
    Some(rest.to_string())
}

/// Rule 3: `berCVerV` -> `ber-CVerV` where C != `r`.
pub fn rule_3(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ber")?;
    let bytes = rest.as_bytes();
    let c = *bytes.first()?;
    let v = *bytes.get(1)?;
    if c == b'r' || !is_consonant(c) || !is_vowel(v) {
        return None;
    }
    (has_at(rest, 2, "er") && is_vowel(*bytes.get(4)?)).then(|| rest.to_string())
}

/// Rule 4: `belajar` -> `bel-ajar`.
pub fn rule_4(word: &str) -> Option<String> {
    (word == "belajar").then(|| "ajar".to_string())
}

/// Rule 5: `beC1erC2` -> `be-C1erC2`.
pub fn rule_5(word: &str) -> Option<String> {
    let rest = word.strip_prefix("be")?;
    let bytes = rest.as_bytes();
    let c1 = *bytes.first()?;
    let c2 = *bytes.get(3)?;
    (is_consonant(c1) && has_at(rest, 1, "er") && is_consonant(c2)).then(|| rest.to_string())
}

/// Rule 6a: `terV` -> `ter-V`.
pub fn rule_6a(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    starts_with_vowel(rest).then(|| rest.to_string())
}

/// Rule 6b: `terV` -> `te-rV`.
pub fn rule_6b(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    starts_with_vowel(rest).then(|| format!("r{rest}"))
}

/// Rule 7: `terCerV` -> `ter-CerV` where C != `r`.
pub fn rule_7(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    let bytes = rest.as_bytes();
    let c = *bytes.first()?;
    if c == b'r' || !is_consonant(c) {
        return None;
    }
    (has_at(rest, 1, "er") && is_vowel(*bytes.get(3)?)).then(|| rest.to_string())
}

/// Rule 8: `terCP` -> `ter-CP` where C != `r` and P != `er`.
pub fn rule_8(word: &str) -> Option<String> {
    let rest = word.strip_prefix("ter")?;
    let c = *rest.as_bytes().first()?;
    if c == b'r' || !is_consonant(c) || has_at(rest, 1, "er") {
        return None;
    }
    Some(rest.to_string())
}

/// Rule 9: `teC1erC2` -> `te-C1erC2` where C1 != `r`.
pub fn rule_9(word: &str) -> Option<String> {
    let rest = word.strip_prefix("te")?;
    let bytes = rest.as_bytes();
    let c1 = *bytes.first()?;
    let c2 = *bytes.get(3)?;
    if c1 == b'r' || !is_consonant(c1) {
        return None;
    }
    (has_at(rest, 1, "er") && is_consonant(c2)).then(|| rest.to_string())
}

/// Rule 10: `me{l|r|w|y}V` -> `me-{l|r|w|y}V`.
pub fn rule_10(word: &str) -> Option<String> {
    let rest = word.strip_prefix("me")?;
    let bytes = rest.as_bytes();
    let c = *bytes.first()?;
    (matches!(c, b'l' | b'r' | b'w' | b'y') && is_vowel(*bytes.get(1)?))
        .then(|| rest.to_string())
}

/// Rule 11: `mem{b|f|v}` -> `mem-{b|f|v}`.
pub fn rule_11(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mem")?;
    matches!(rest.as_bytes().first()?, b'b' | b'f' | b'v').then(|| rest.to_string())
}

/// Rule 12: `mempe` -> `mem-pe`.
///
/// Deliberately the collapsed form of Nazief-Adriani's `mempe{r|l}` rule:
/// any `mempe`-initial word rewrites to `pe` + remainder. Downstream
/// fixtures depend on the collapsed behavior.
pub fn rule_12(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mempe")?;
    Some(format!("pe{rest}"))
}

/// Rule 13: `memV` -> `me-mV`.
pub fn rule_13(word: &str) -> Option<String> {
    let rest = word.strip_prefix("mem")?;
    starts_with_vowel(rest).then(|| format!("m{rest}"))
}

/// Rule 14: `men{c|d|j|z}` -> `men-{c|d|j|z}`.
pub fn rule_14(word: &str) -> Option<String> {
    let rest = word.strip_prefix("men")?;
    matches!(rest.as_bytes().first()?, b'c' | b'd' | b'j' | b'z').then(|| rest.to_string())
}

/// Rule 15: `meng`/`peng` followed by a vowel or `{g|h|q|k}` -> drop the
/// prefix.
pub fn rule_15(word: &str) -> Option<String> {
    let rest = word
        .strip_prefix("meng")
        .or_else(|| word.strip_prefix("peng"))?;
    let c = *rest.as_bytes().first()?;
    (is_vowel(c) || matches!(c, b'g' | b'h' | b'q' | b'k')).then(|| rest.to_string())
}

/// Rule 16: `menyV`/`penyV` -> `s` + remainder (the nasalized `s` is
/// restored); `pen{c|d|j|z}` -> drop `pen`.
pub fn rule_16(word: &str) -> Option<String> {
    if let Some(rest) = word
        .strip_prefix("meny")
        .or_else(|| word.strip_prefix("peny"))
    {
        if starts_with_vowel(rest) {
            return Some(format!("s{rest}"));
        }
    }
    let rest = word.strip_prefix("pen")?;
    matches!(rest.as_bytes().first()?, b'c' | b'd' | b'j' | b'z').then(|| rest.to_string())
}
