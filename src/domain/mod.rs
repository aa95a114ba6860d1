//! Domain types and their validation rules.
//!
//! Everything in here is pure: no I/O, no shared state, no panics on any
//! input in the declared range.

pub mod person;

pub use person::{Person, PersonInput, ValidationError, ValidationResult, MAX_AGE};
