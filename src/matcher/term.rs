//! Bilingual term matcher
//!
//! Suppression is terminal; otherwise the candidate's source term is looked
//! up and its accompanying target text compared against the authoritative
//! value by exact equality after normalization.

use crate::extractor::Candidate;
use crate::numerals::normalize_numerals;
use crate::reference::{normalize, Domain, ReferenceTable};
use super::types::{MatchOutcome, Verdict};

/// Resolves term candidates against the reference table
pub struct TermMatcher {
    domain: Domain,
    /// Rewrite Chinese numeral runs before comparison, so numeral variants
    /// of the same value agree (壹圆 vs 一圆)
    numeral_normalization: bool,
}

impl TermMatcher {
    pub fn new(domain: Domain, numeral_normalization: bool) -> Self {
        Self {
            domain,
            numeral_normalization,
        }
    }

    /// Resolve one candidate into a verdict
    pub fn resolve(&self, candidate: Candidate, table: &ReferenceTable) -> Verdict {
        if candidate.flags.has_uncertainty {
            return Verdict {
                candidate,
                outcome: MatchOutcome::Suppressed,
                expected_term: None,
            };
        }

        let Some(expected) = table.lookup(&candidate.extracted_text, self.domain) else {
            return Verdict {
                candidate,
                outcome: MatchOutcome::NoReference,
                expected_term: None,
            };
        };
        let expected = expected.to_string();

        let matches = candidate
            .target_text
            .as_deref()
            .is_some_and(|actual| self.compare(actual, &expected));

        Verdict {
            candidate,
            outcome: if matches {
                MatchOutcome::ExactMatch
            } else {
                MatchOutcome::Mismatch
            },
            expected_term: Some(expected),
        }
    }

    fn compare(&self, actual: &str, expected: &str) -> bool {
        let mut actual = normalize(actual);
        let mut expected = normalize(expected);
        if self.numeral_normalization {
            actual = normalize_numerals(&actual);
            expected = normalize_numerals(&expected);
        }
        actual == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ContextFlags;
    use crate::reference::ReferenceEntry;

    fn table() -> ReferenceTable {
        ReferenceTable::load([
            ReferenceEntry::new("Kiangnan", "江南", Domain::MintNames),
            ReferenceEntry::new("Dollar", "壹圆", Domain::CoinDescriptions),
        ])
        .unwrap()
    }

    fn candidate(term: &str, target: Option<&str>, uncertain: bool) -> Candidate {
        Candidate {
            record_id: "r1".to_string(),
            span: (0, term.len()),
            extracted_text: term.to_string(),
            target_text: target.map(|t| t.to_string()),
            flags: ContextFlags {
                has_uncertainty: uncertain,
                follows_year: true,
            },
        }
    }

    #[test]
    fn test_exact_match() {
        let matcher = TermMatcher::new(Domain::MintNames, false);
        let verdict = matcher.resolve(candidate("Kiangnan", Some("江南"), false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::ExactMatch);
    }

    #[test]
    fn test_mismatch_sets_expected_term() {
        let matcher = TermMatcher::new(Domain::MintNames, false);
        let verdict = matcher.resolve(candidate("Kiangnan", Some("江苏"), false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::Mismatch);
        assert_eq!(verdict.expected_term.as_deref(), Some("江南"));
    }

    #[test]
    fn test_missing_target_is_mismatch() {
        let matcher = TermMatcher::new(Domain::MintNames, false);
        let verdict = matcher.resolve(candidate("Kiangnan", None, false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::Mismatch);
        assert_eq!(verdict.expected_term.as_deref(), Some("江南"));
    }

    #[test]
    fn test_unknown_term_is_no_reference() {
        let matcher = TermMatcher::new(Domain::MintNames, false);
        let verdict = matcher.resolve(candidate("Unknownmint", Some("江南"), false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::NoReference);
        assert!(verdict.expected_term.is_none());
    }

    #[test]
    fn test_uncertainty_is_terminal() {
        let matcher = TermMatcher::new(Domain::MintNames, false);
        // Even an unknown term stays suppressed
        let verdict = matcher.resolve(candidate("Unknownmint", None, true), &table());
        assert_eq!(verdict.outcome, MatchOutcome::Suppressed);
    }

    #[test]
    fn test_numeral_variants_agree_when_enabled() {
        let matcher = TermMatcher::new(Domain::CoinDescriptions, true);
        let verdict = matcher.resolve(candidate("Dollar", Some("一圆"), false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::ExactMatch);

        let strict = TermMatcher::new(Domain::CoinDescriptions, false);
        let verdict = strict.resolve(candidate("Dollar", Some("一圆"), false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::Mismatch);
    }
}
