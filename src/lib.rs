//! akar — Indonesian affix-stripping stemmer.
//!
//! Reduces an inflected Indonesian word to its dictionary root by iteratively
//! stripping recognized affixes (inflectional particles, possessive pronouns,
//! derivational suffixes, and prefixes) and validating every candidate against
//! a caller-supplied dictionary. Candidates that the dictionary rejects are
//! never accepted over a dictionary hit, which keeps overstemming in check.
//!
//! The prefix layer implements the Nazief-Adriani disambiguation rule family
//! (rules 1a-16): context-sensitive morphophonemic rewrites for the
//! `ber-`, `bel-`, `be-`, `ter-`, `te-`, `me-`, and `pe-` prefixes.
//!
//! Input is expected to be a single normalized word — lowercase, alphabetic.
//! Tokenization and punctuation stripping happen upstream.
//!
//! # Quick start
//!
//! ```
//! use akar::{SetDictionary, Stemmer};
//!
//! let dictionary = SetDictionary::from_list(&["beli", "jual", "hantu"]);
//! let stemmer = Stemmer::new(dictionary);
//!
//! assert_eq!(stemmer.stem("membelikan"), "beli");
//! assert_eq!(stemmer.stem("penjualan"), "jual");
//! assert_eq!(stemmer.stem("menghantui"), "hantu");
//! ```

pub mod affix;
pub mod dictionary;
pub mod stemmer;
pub mod types;

// Re-export the main surface at the crate root for convenience
pub use affix::pairs::contains_invalid_affix_pair;
pub use affix::prefix::remove_plain_prefix;
pub use affix::suffix::{
    remove_derivational_suffix, remove_inflectional_particle,
    remove_inflectional_possessive_pronoun, removed_affix,
};
pub use dictionary::{Dictionary, SetDictionary};
pub use stemmer::Stemmer;
pub use types::{FallbackPolicy, RuleId, StemConfig, StemResult};
