//! Per-domain validator facade
//!
//! Wires the extractor, matcher variant, and classifier for one domain and
//! drives batch processing. Records are independent units; batches may run
//! sequentially, with cooperative cancellation, or partitioned across rayon
//! workers and merged.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::classifier::{BatchReport, BatchStats, Classifier, ClassifiedError, RecordDiagnostic};
use crate::extractor::{CandidateExtractor, RuleSet, TextRecord};
use crate::matcher::{MatchOutcome, TermMatcher, TraditionalMatcher, Verdict};
use crate::reference::{Domain, ReferenceTable};

/// Records per rayon work unit in `validate_batch_parallel`
const PARALLEL_CHUNK: usize = 256;

enum MatcherKind {
    Term(TermMatcher),
    Traditional(TraditionalMatcher),
}

/// A fully configured validation pipeline for one domain
pub struct DomainValidator {
    domain: Domain,
    table: Arc<ReferenceTable>,
    extractor: CandidateExtractor,
    matcher: MatcherKind,
    classifier: Classifier,
}

impl DomainValidator {
    /// Build a validator from an explicit rule set.
    ///
    /// The built-in constructors cover the four standard domains; this is
    /// the calibration entry point for adjusted lexicons or predicates.
    pub fn with_rules(rules: RuleSet, table: Arc<ReferenceTable>) -> Self {
        let domain = rules.domain;
        let matcher = if rules.per_character {
            MatcherKind::Traditional(TraditionalMatcher::new())
        } else {
            MatcherKind::Term(TermMatcher::new(domain, rules.numeral_normalization))
        };
        let extractor = CandidateExtractor::new(rules, &table);
        Self {
            domain,
            table,
            extractor,
            matcher,
            classifier: Classifier::new(domain),
        }
    }

    /// Mint name validator: year-gated extraction, mint-suffix targets
    pub fn mint_names(table: Arc<ReferenceTable>) -> Self {
        Self::with_rules(RuleSet::mint_names(), table)
    }

    /// Coin description validator: numeral-aware comparison
    pub fn coin_descriptions(table: Arc<ReferenceTable>) -> Self {
        Self::with_rules(RuleSet::coin_descriptions(), table)
    }

    /// Banknote description validator: numeral-aware comparison
    pub fn banknote_descriptions(table: Arc<ReferenceTable>) -> Self {
        Self::with_rules(RuleSet::banknote_descriptions(), table)
    }

    /// Traditional-character authenticity validator
    pub fn traditional_characters(table: Arc<ReferenceTable>) -> Self {
        Self::with_rules(RuleSet::traditional_characters(), table)
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Swap in a freshly loaded table between runs.
    ///
    /// The old table stays valid for any run still holding its Arc; no
    /// in-place mutation is ever visible mid-run.
    pub fn reload_table(&mut self, table: Arc<ReferenceTable>) {
        self.extractor = CandidateExtractor::new(self.extractor.rules().clone(), &table);
        self.table = table;
    }

    /// Validate one record into verdicts, without classification.
    pub fn validate_record(&self, record: &TextRecord) -> Vec<Verdict> {
        self.extractor
            .extract(record, &self.table)
            .into_iter()
            .map(|candidate| match &self.matcher {
                MatcherKind::Term(m) => m.resolve(candidate, &self.table),
                MatcherKind::Traditional(m) => m.resolve(candidate, &self.table),
            })
            .collect()
    }

    /// Validate a batch sequentially.
    pub fn validate_batch(&self, records: &[TextRecord]) -> BatchReport {
        let cancel = AtomicBool::new(false);
        self.validate_batch_cancellable(records, &cancel)
    }

    /// Validate a batch with a cooperative cancel flag, checked between
    /// records (never mid-record). Returns the partial report on cancel.
    pub fn validate_batch_cancellable(
        &self,
        records: &[TextRecord],
        cancel: &AtomicBool,
    ) -> BatchReport {
        let start = Instant::now();
        let mut errors: Vec<ClassifiedError> = Vec::new();
        let mut diagnostics: Vec<RecordDiagnostic> = Vec::new();
        let mut stats = BatchStats::default();
        let mut processed = 0usize;

        for record in records {
            if cancel.load(Ordering::Relaxed) {
                break;
            }
            processed += 1;

            if let Some(reason) = self.malformed_reason(record) {
                stats.records_skipped += 1;
                diagnostics.push(RecordDiagnostic {
                    record_id: record.id.clone(),
                    reason,
                });
                continue;
            }

            stats.records_checked += 1;
            let verdicts = self.validate_record(record);
            if verdicts
                .iter()
                .any(|v| v.outcome == MatchOutcome::Suppressed)
            {
                stats.records_suppressed += 1;
                debug!(record = %record.id, "record suppressed by uncertainty predicate");
            }

            for verdict in &verdicts {
                if let Some(mut error) = self.classifier.classify(verdict) {
                    error.suggestion = self.build_suggestion(record, verdict);
                    errors.push(error);
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        let report = self
            .classifier
            .aggregate(processed, errors, diagnostics, stats);
        info!(
            domain = self.domain.as_str(),
            records = report.total_records,
            errors = report.errors.len(),
            suppressed = report.stats.records_suppressed,
            duration_ms = report.stats.duration_ms,
            "batch validated"
        );
        report
    }

    /// Validate a batch across rayon workers.
    ///
    /// Partitions are disjoint record runs merged by the associative
    /// aggregation rule, so counts equal the sequential result.
    pub fn validate_batch_parallel(&self, records: &[TextRecord]) -> BatchReport {
        records
            .par_chunks(PARALLEL_CHUNK)
            .map(|chunk| self.validate_batch(chunk))
            .reduce(BatchReport::default, BatchReport::merge)
    }

    fn malformed_reason(&self, record: &TextRecord) -> Option<String> {
        if record.domain != self.domain {
            return Some(format!(
                "domain tag {} does not match validator domain {}",
                record.domain.as_str(),
                self.domain.as_str()
            ));
        }
        if record.raw_text.trim().is_empty() {
            return Some("empty text".to_string());
        }
        None
    }

    /// Build a corrected-text suggestion for reportable verdicts.
    ///
    /// Mismatches replace the wrong target term when it appears verbatim,
    /// otherwise append the authoritative term after a sentence-final
    /// period (without doubling one already present). Variant-form findings
    /// substitute the traditional character.
    fn build_suggestion(&self, record: &TextRecord, verdict: &Verdict) -> Option<String> {
        let expected = verdict.expected_term.as_deref()?;
        match verdict.outcome {
            MatchOutcome::Mismatch => {
                if let Some(actual) = verdict.candidate.target_text.as_deref() {
                    if record.raw_text.contains(actual) {
                        return Some(record.raw_text.replace(actual, expected));
                    }
                }
                let trimmed = record.raw_text.trim_end();
                if trimmed.ends_with('。') {
                    Some(format!("{trimmed}{expected}"))
                } else {
                    Some(format!("{trimmed}。{expected}"))
                }
            }
            MatchOutcome::SimplifiedOrVariantForm => Some(
                record
                    .raw_text
                    .replace(&verdict.candidate.extracted_text, expected),
            ),
            _ => None,
        }
    }
}
