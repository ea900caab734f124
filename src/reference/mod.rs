//! Reference table module
//!
//! Provides the authoritative bilingual term mapping: conflict-checked load,
//! normalized O(1) lookup, and per-domain term iteration.

mod types;
mod table;

pub use types::*;
pub use table::{ReferenceTable, normalize};
