//! Per-domain extraction rule sets
//!
//! Rules are configuration data, not hard-coded behavior: callers can build
//! their own `RuleSet` to recalibrate the positional predicate, the
//! uncertainty lexicon, or the target-language patterns.

use regex::Regex;

use crate::reference::Domain;

/// Hedge words that suppress validation for a whole record.
///
/// A cataloguer using one of these is admitting the attribution is not
/// certain; flagging such a record would be a false positive.
pub const DEFAULT_UNCERTAINTY_WORDS: &[&str] = &[
    "uncertain",
    "likely",
    "probably",
    "possibly",
    "maybe",
    "perhaps",
    "or",
    "either",
    "unknown",
    "unidentified",
    "attributed",
    "tentative",
];

/// Phrases exempt from uncertainty matching. "Uncertain Mint" is itself an
/// authoritative database entry, not a hedge.
const DEFAULT_UNCERTAINTY_EXCEPTIONS: &[&str] = &["uncertain mint"];

/// Structural precondition a candidate must satisfy to be emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRule {
    /// No positional constraint
    Anywhere,
    /// Only terms occurring after the first year-like token are eligible.
    /// Keeps titles, grading notes, and date clauses from producing
    /// false positives.
    AfterYear,
}

/// Extraction configuration for one domain
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Domain the rules apply to
    pub domain: Domain,
    /// Positional predicate gating candidate emission
    pub position: PositionRule,
    /// Lowercase hedge words; any whole-word hit suppresses the record
    pub uncertainty_words: Vec<String>,
    /// Lowercase phrases masked out before uncertainty matching
    pub uncertainty_exceptions: Vec<String>,
    /// Terms recognized as domain terminology beyond the reference table's
    /// source terms. Occurrences resolve to NoReference when the table has
    /// no mapping, surfacing vocabulary the database is missing.
    pub extra_terms: Vec<String>,
    /// Target-language extraction patterns tried before the target-term
    /// lexicon scan (e.g. mint-suffix forms like X造幣廠)
    pub target_patterns: Vec<Regex>,
    /// Scan per character instead of per lexicon term
    /// (traditional-character authenticity)
    pub per_character: bool,
    /// Rewrite Chinese numeral runs to Arabic before target comparison
    pub numeral_normalization: bool,
}

impl RuleSet {
    fn base(domain: Domain) -> Self {
        Self {
            domain,
            position: PositionRule::Anywhere,
            uncertainty_words: DEFAULT_UNCERTAINTY_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            uncertainty_exceptions: DEFAULT_UNCERTAINTY_EXCEPTIONS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            extra_terms: Vec::new(),
            target_patterns: Vec::new(),
            per_character: false,
            numeral_normalization: false,
        }
    }

    /// Mint name rules: year-position gated, mint-suffix target patterns
    pub fn mint_names() -> Self {
        let patterns = [
            r"[^。，\s]{2,15}造幣廠",
            r"[^。，\s]{2,15}鑄幣廠",
            r"造幣總廠",
            r"寶德局",
        ];
        Self {
            position: PositionRule::AfterYear,
            target_patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("static mint pattern"))
                .collect(),
            ..Self::base(Domain::MintNames)
        }
    }

    /// Coin description rules: numeral-aware target comparison
    pub fn coin_descriptions() -> Self {
        Self {
            numeral_normalization: true,
            ..Self::base(Domain::CoinDescriptions)
        }
    }

    /// Banknote description rules: numeral-aware target comparison
    pub fn banknote_descriptions() -> Self {
        Self {
            numeral_normalization: true,
            ..Self::base(Domain::BanknoteDescriptions)
        }
    }

    /// Traditional-character rules: per-character scan, no bilingual pairing
    pub fn traditional_characters() -> Self {
        Self {
            per_character: true,
            ..Self::base(Domain::TraditionalCharacters)
        }
    }
}
