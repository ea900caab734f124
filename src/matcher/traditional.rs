//! Traditional-character authenticity matcher
//!
//! Same engine shape as the bilingual matcher, different verdict vocabulary:
//! the reference data maps simplified forms to their canonical traditional
//! forms, and any character found in that mapping is a variant-form finding.

use crate::extractor::Candidate;
use crate::reference::{Domain, ReferenceTable};
use super::types::{MatchOutcome, Verdict};

/// Judges character-form authenticity against the simplified-form mapping
pub struct TraditionalMatcher;

impl TraditionalMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Resolve one per-character candidate
    pub fn resolve(&self, candidate: Candidate, table: &ReferenceTable) -> Verdict {
        if candidate.flags.has_uncertainty {
            return Verdict {
                candidate,
                outcome: MatchOutcome::Suppressed,
                expected_term: None,
            };
        }

        match table.lookup(&candidate.extracted_text, Domain::TraditionalCharacters) {
            Some(traditional) => {
                let traditional = traditional.to_string();
                Verdict {
                    candidate,
                    outcome: MatchOutcome::SimplifiedOrVariantForm,
                    expected_term: Some(traditional),
                }
            }
            None => Verdict {
                candidate,
                outcome: MatchOutcome::Authentic,
                expected_term: None,
            },
        }
    }
}

impl Default for TraditionalMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::ContextFlags;
    use crate::reference::ReferenceEntry;

    fn table() -> ReferenceTable {
        ReferenceTable::load([
            ReferenceEntry::new("国", "國", Domain::TraditionalCharacters),
            ReferenceEntry::new("银", "銀", Domain::TraditionalCharacters),
        ])
        .unwrap()
    }

    fn candidate(ch: &str, uncertain: bool) -> Candidate {
        Candidate {
            record_id: "r1".to_string(),
            span: (0, ch.len()),
            extracted_text: ch.to_string(),
            target_text: None,
            flags: ContextFlags {
                has_uncertainty: uncertain,
                follows_year: false,
            },
        }
    }

    #[test]
    fn test_simplified_character_cites_traditional_form() {
        let verdict = TraditionalMatcher::new().resolve(candidate("国", false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::SimplifiedOrVariantForm);
        assert_eq!(verdict.expected_term.as_deref(), Some("國"));
    }

    #[test]
    fn test_traditional_character_is_authentic() {
        let verdict = TraditionalMatcher::new().resolve(candidate("國", false), &table());
        assert_eq!(verdict.outcome, MatchOutcome::Authentic);
    }

    #[test]
    fn test_uncertainty_suppresses() {
        let verdict = TraditionalMatcher::new().resolve(candidate("国", true), &table());
        assert_eq!(verdict.outcome, MatchOutcome::Suppressed);
    }
}
