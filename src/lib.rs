//! numilint-core: Terminology matching and classification engine
//!
//! Validates bilingual (English/Chinese) numismatic descriptions against an
//! authoritative terminology table and produces batch error reports:
//! - Reference: conflict-checked bilingual term table with normalized lookup
//! - Extractor: rule-driven candidate extraction from mixed-script text
//! - Numerals: compound Chinese numeral conversion for value-equal comparison
//! - Matcher: exact and uncertainty-aware verdict resolution
//! - Classifier: error taxonomy and mergeable batch reports
//! - Validator: per-domain facades (mint names, coin and banknote
//!   descriptions, traditional-character authenticity) over one engine
//!
//! The engine is a pure function of (records, reference table, rule
//! configuration) → report. File parsing, UI, and auth are external
//! collaborators.

pub mod reference;
pub mod extractor;
pub mod numerals;
pub mod matcher;
pub mod classifier;
pub mod validator;

// Re-exports for convenience
pub use reference::{normalize, Domain, LoadError, ReferenceEntry, ReferenceTable};
pub use extractor::{
    Candidate, CandidateExtractor, ContextFlags, PositionRule, RuleSet, TextRecord,
    DEFAULT_UNCERTAINTY_WORDS,
};
pub use numerals::{convert_compound, normalize_numerals};
pub use matcher::{MatchOutcome, TermMatcher, TraditionalMatcher, Verdict};
pub use classifier::{
    BatchReport, BatchStats, ClassifiedError, Classifier, ErrorCategory, RecordDiagnostic,
};
pub use validator::DomainValidator;
