//! Classification and aggregation module
//!
//! Maps verdicts to the error taxonomy and accumulates per-record and
//! per-batch statistics into a mergeable report.

mod types;
mod aggregator;

pub use types::*;
pub use aggregator::Classifier;
