//! Types for the reference table
//!
//! Defines the validation domains, the authoritative entry shape,
//! and load-time errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation domain a term or record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Issuing mint names (e.g. "Kiangnan" / 江南)
    MintNames,
    /// Coin description terminology
    CoinDescriptions,
    /// Banknote description terminology
    BanknoteDescriptions,
    /// Traditional-character authenticity (simplified form detection)
    TraditionalCharacters,
}

impl Domain {
    /// Stable lowercase name, used in report details and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::MintNames => "mint_names",
            Domain::CoinDescriptions => "coin_descriptions",
            Domain::BanknoteDescriptions => "banknote_descriptions",
            Domain::TraditionalCharacters => "traditional_characters",
        }
    }
}

/// One row of the authoritative bilingual mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Source-language term (English side)
    pub source_term: String,
    /// Authoritative target-language equivalent (Chinese side)
    pub target_term: String,
    /// Domain the mapping belongs to
    pub domain: Domain,
}

impl ReferenceEntry {
    pub fn new(
        source_term: impl Into<String>,
        target_term: impl Into<String>,
        domain: Domain,
    ) -> Self {
        Self {
            source_term: source_term.into(),
            target_term: target_term.into(),
            domain,
        }
    }
}

/// Error loading the reference table
///
/// All variants are fatal to the run: validating against a table known to be
/// inconsistent would corrupt every downstream verdict.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// Two entries share a (source_term, domain) key but disagree on the target
    #[error("conflicting entries for '{source_term}' in {domain:?}: '{existing}' vs '{incoming}'")]
    ConflictingEntry {
        source_term: String,
        domain: Domain,
        existing: String,
        incoming: String,
    },
    /// An entry has an empty source term after normalization
    #[error("empty source term in {domain:?} (target '{target_term}')")]
    EmptySourceTerm { domain: Domain, target_term: String },
    /// An entry has an empty target term after normalization
    #[error("empty target term for '{source_term}' in {domain:?}")]
    EmptyTargetTerm { source_term: String, domain: Domain },
}
