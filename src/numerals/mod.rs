//! Chinese numeral handling
//!
//! Converts compound Chinese numerals (including formal banking forms) to
//! their Arabic values and rewrites numeral runs inside mixed-script text.
//! The coin and banknote matchers use this so numeral variants of the same
//! value compare equal (壹圆 vs 一圆).

mod convert;

pub use convert::{convert_compound, is_numeral_char, normalize_numerals};
