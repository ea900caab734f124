//! Verdict classification and report aggregation

use tracing::debug;

use crate::matcher::{MatchOutcome, Verdict};
use crate::reference::Domain;
use super::types::{BatchReport, BatchStats, ClassifiedError, ErrorCategory, RecordDiagnostic};

/// Maps verdicts onto the error taxonomy
pub struct Classifier {
    domain: Domain,
}

impl Classifier {
    pub fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// Classify one verdict. Suppressed, ExactMatch, and Authentic verdicts
    /// produce no error.
    pub fn classify(&self, verdict: &Verdict) -> Option<ClassifiedError> {
        match verdict.outcome {
            MatchOutcome::ExactMatch | MatchOutcome::Authentic => None,
            MatchOutcome::Suppressed => {
                debug!(record = %verdict.candidate.record_id, "verdict suppressed");
                None
            }
            MatchOutcome::Mismatch => {
                let expected = verdict.expected_term.as_deref().unwrap_or_default();
                let detail = match verdict.candidate.target_text.as_deref() {
                    Some(actual) => format!(
                        "'{}' translated as '{}', expected '{}'",
                        verdict.candidate.extracted_text, actual, expected
                    ),
                    None => format!(
                        "'{}' has no target term in the text, expected '{}'",
                        verdict.candidate.extracted_text, expected
                    ),
                };
                Some(ClassifiedError {
                    record_id: verdict.candidate.record_id.clone(),
                    category: ErrorCategory::TranslationMismatch,
                    detail,
                    suggestion: None,
                })
            }
            MatchOutcome::NoReference => Some(ClassifiedError {
                record_id: verdict.candidate.record_id.clone(),
                category: ErrorCategory::UnknownTerm,
                detail: format!(
                    "'{}' not present in {} reference data",
                    verdict.candidate.extracted_text,
                    self.domain.as_str()
                ),
                suggestion: None,
            }),
            MatchOutcome::SimplifiedOrVariantForm => {
                let traditional = verdict.expected_term.as_deref().unwrap_or_default();
                Some(ClassifiedError {
                    record_id: verdict.candidate.record_id.clone(),
                    category: ErrorCategory::SimplifiedCharacters,
                    detail: format!(
                        "{} → {}",
                        verdict.candidate.extracted_text, traditional
                    ),
                    suggestion: None,
                })
            }
        }
    }

    /// Build a report from classified errors, in input order.
    pub fn aggregate(
        &self,
        total_records: usize,
        errors: Vec<ClassifiedError>,
        diagnostics: Vec<RecordDiagnostic>,
        stats: BatchStats,
    ) -> BatchReport {
        let mut per_category_counts = rustc_hash::FxHashMap::default();
        for error in &errors {
            *per_category_counts.entry(error.category).or_default() += 1;
        }
        BatchReport {
            total_records,
            per_category_counts,
            errors,
            diagnostics,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{Candidate, ContextFlags};

    fn verdict(outcome: MatchOutcome, expected: Option<&str>, target: Option<&str>) -> Verdict {
        Verdict {
            candidate: Candidate {
                record_id: "r1".to_string(),
                span: (0, 8),
                extracted_text: "Kiangnan".to_string(),
                target_text: target.map(|t| t.to_string()),
                flags: ContextFlags::default(),
            },
            outcome,
            expected_term: expected.map(|e| e.to_string()),
        }
    }

    #[test]
    fn test_clean_outcomes_produce_no_error() {
        let classifier = Classifier::new(Domain::MintNames);
        for outcome in [
            MatchOutcome::ExactMatch,
            MatchOutcome::Suppressed,
            MatchOutcome::Authentic,
        ] {
            assert!(classifier.classify(&verdict(outcome, None, None)).is_none());
        }
    }

    #[test]
    fn test_mismatch_detail_cites_both_terms() {
        let classifier = Classifier::new(Domain::MintNames);
        let error = classifier
            .classify(&verdict(MatchOutcome::Mismatch, Some("江南"), Some("江苏")))
            .unwrap();
        assert_eq!(error.category, ErrorCategory::TranslationMismatch);
        assert!(error.detail.contains("江南"));
        assert!(error.detail.contains("江苏"));
    }

    #[test]
    fn test_no_reference_is_unknown_term() {
        let classifier = Classifier::new(Domain::MintNames);
        let error = classifier
            .classify(&verdict(MatchOutcome::NoReference, None, None))
            .unwrap();
        assert_eq!(error.category, ErrorCategory::UnknownTerm);
        assert!(error.detail.contains("mint_names"));
    }

    #[test]
    fn test_counts_sum_to_error_len() {
        let classifier = Classifier::new(Domain::MintNames);
        let errors: Vec<_> = [
            MatchOutcome::Mismatch,
            MatchOutcome::NoReference,
            MatchOutcome::Mismatch,
        ]
        .iter()
        .filter_map(|o| classifier.classify(&verdict(*o, Some("江南"), None)))
        .collect();

        let report = classifier.aggregate(3, errors, Vec::new(), BatchStats::default());
        let sum: usize = report.per_category_counts.values().sum();
        assert_eq!(sum, report.errors.len());
        assert_eq!(
            report.per_category_counts[&ErrorCategory::TranslationMismatch],
            2
        );
    }

    #[test]
    fn test_merge_sums_counts_and_concatenates() {
        let classifier = Classifier::new(Domain::MintNames);
        let left = classifier.aggregate(
            1,
            vec![classifier
                .classify(&verdict(MatchOutcome::Mismatch, Some("江南"), Some("江苏")))
                .unwrap()],
            Vec::new(),
            BatchStats {
                records_checked: 1,
                ..Default::default()
            },
        );
        let right = classifier.aggregate(
            1,
            vec![classifier
                .classify(&verdict(MatchOutcome::NoReference, None, None))
                .unwrap()],
            Vec::new(),
            BatchStats {
                records_checked: 1,
                ..Default::default()
            },
        );

        let merged = left.merge(right);
        assert_eq!(merged.total_records, 2);
        assert_eq!(merged.errors.len(), 2);
        assert_eq!(merged.stats.records_checked, 2);
        let sum: usize = merged.per_category_counts.values().sum();
        assert_eq!(sum, 2);
    }
}
