//! Matching module
//!
//! Resolves candidates against the reference table into verdicts. The
//! traditional-character matcher variant judges character-form authenticity
//! instead of a bilingual pair.

mod types;
mod term;
mod traditional;

pub use types::*;
pub use term::TermMatcher;
pub use traditional::TraditionalMatcher;
