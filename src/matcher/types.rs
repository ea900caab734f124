//! Types for match verdicts

use serde::{Deserialize, Serialize};

use crate::extractor::Candidate;

/// Outcome of resolving one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Target text equals the authoritative term
    ExactMatch,
    /// Target text differs from the authoritative term
    Mismatch,
    /// Term absent from the authoritative data; remediation is adding it
    /// to the database, not fixing the text
    NoReference,
    /// Record carries an uncertainty keyword; not evaluated
    Suppressed,
    /// Character form is the canonical traditional form
    /// (traditional-character domain only)
    Authentic,
    /// Character is a simplified or variant form
    /// (traditional-character domain only)
    SimplifiedOrVariantForm,
}

/// A candidate together with its resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// The candidate that was resolved
    pub candidate: Candidate,
    /// Resolution outcome
    pub outcome: MatchOutcome,
    /// Authoritative term, set for Mismatch and SimplifiedOrVariantForm
    pub expected_term: Option<String>,
}
