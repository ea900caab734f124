//! Types for classified errors and batch reports

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Error taxonomy for the batch report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Target text disagrees with the authoritative translation;
    /// remediation is fixing the text
    TranslationMismatch,
    /// Term absent from the authoritative data; remediation is adding it
    /// to the database
    UnknownTerm,
    /// Simplified or variant character forms in text that must be
    /// traditional
    SimplifiedCharacters,
}

/// One reported validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedError {
    /// Record the error belongs to
    pub record_id: String,
    /// Taxonomy category
    pub category: ErrorCategory,
    /// Human-readable finding, citing actual and expected terms
    pub detail: String,
    /// Corrected text, when the engine can build one
    pub suggestion: Option<String>,
}

/// Diagnostic for a record that was skipped rather than validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDiagnostic {
    /// Record that was skipped
    pub record_id: String,
    /// Why it was skipped
    pub reason: String,
}

/// Counters accumulated over one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Records that went through extraction and matching
    pub records_checked: usize,
    /// Records suppressed by the uncertainty predicate
    pub records_suppressed: usize,
    /// Malformed records skipped with a diagnostic
    pub records_skipped: usize,
    /// Processing time, summed across partitions when merged
    pub duration_ms: u64,
}

/// Result of validating one batch
///
/// Built once per run, accumulated monotonically, read-only once returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// Records handed to the run, including skipped ones
    pub total_records: usize,
    /// Error counts per category; sums to `errors.len()`
    pub per_category_counts: FxHashMap<ErrorCategory, usize>,
    /// All classified errors, in record order
    pub errors: Vec<ClassifiedError>,
    /// Skipped-record diagnostics
    pub diagnostics: Vec<RecordDiagnostic>,
    /// Run counters
    pub stats: BatchStats,
}

impl BatchReport {
    /// Merge two partial reports from disjoint record partitions.
    ///
    /// Counts sum and sequences concatenate in partition order, so merging
    /// is associative and commutative up to error ordering.
    pub fn merge(mut self, other: BatchReport) -> BatchReport {
        self.total_records += other.total_records;
        for (category, count) in other.per_category_counts {
            *self.per_category_counts.entry(category).or_default() += count;
        }
        self.errors.extend(other.errors);
        self.diagnostics.extend(other.diagnostics);
        self.stats.records_checked += other.stats.records_checked;
        self.stats.records_suppressed += other.stats.records_suppressed;
        self.stats.records_skipped += other.stats.records_skipped;
        self.stats.duration_ms += other.stats.duration_ms;
        self
    }
}
