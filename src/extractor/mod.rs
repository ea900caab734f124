//! Candidate extraction module
//!
//! Scans a text record for domain terminology and produces term-position
//! candidates, applying the domain's positional predicate (year-before-term)
//! and uncertainty suppression flagging.

mod types;
mod rules;
mod extractor;

pub use types::*;
pub use rules::{PositionRule, RuleSet, DEFAULT_UNCERTAINTY_WORDS};
pub use extractor::CandidateExtractor;
