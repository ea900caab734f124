//! Types for candidate extraction
//!
//! Defines the input record shape and the transient candidate produced for
//! every terminology occurrence found in a record.

use serde::{Deserialize, Serialize};

use crate::reference::Domain;

/// One input unit: a catalogue description with its domain tag
///
/// Immutable once handed to the engine. Parsing raw file bytes into this
/// shape is an external collaborator's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRecord {
    /// Caller-supplied identifier (inventory number, row id)
    pub id: String,
    /// Mixed-language free text (English and Chinese may interleave
    /// without whitespace delimiters)
    pub raw_text: String,
    /// Domain the record should be validated against
    pub domain: Domain,
}

impl TextRecord {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>, domain: Domain) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
            domain,
        }
    }
}

/// Structural context observed while extracting a candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFlags {
    /// Record contains an uncertainty keyword; the candidate must be
    /// suppressed rather than evaluated
    pub has_uncertainty: bool,
    /// A year-like token occurs before the candidate in the record
    pub follows_year: bool,
}

/// A term occurrence eligible for validation
///
/// Produced transiently per record; duplicate occurrences of the same term
/// each get their own candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Id of the record the candidate came from
    pub record_id: String,
    /// Byte span of the occurrence in the record's raw text
    pub span: (usize, usize),
    /// The source-language term as it appears in the text
    pub extracted_text: String,
    /// Target-language term extracted from the same record, if any
    pub target_text: Option<String>,
    /// Context flags gathered during extraction
    pub flags: ContextFlags,
}
