//! Validator facade module
//!
//! One configured validator per domain, all sharing the same
//! extract → match → classify engine shape.

mod facade;

pub use facade::DomainValidator;
