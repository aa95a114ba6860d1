//! # Person Validation - Applicative Error Accumulation
//!
//! A small library that validates a `Person` record (a name and an age)
//! under three fixed rules and reports **every** violated rule at once,
//! instead of stopping at the first one.
//!
//! ## Overview
//!
//! The rules, evaluated independently and always in this order:
//!
//! 1. The name must not be blank (empty or whitespace-only)
//! 2. The age must not be negative
//! 3. The age must not exceed 130
//!
//! Validation is applicative, not monadic: an earlier failure never
//! short-circuits a later rule, and all failures come back together as a
//! non-empty, ordered error list. A fail-fast entry point is also provided
//! for callers that only want the first violation.
//!
//! ## Core Concepts
//!
//! - **Person**: the validated record. Construction and validation are
//!   inseparable - its fields are private and it cannot be deserialized,
//!   so a `Person` in hand always satisfies all three rules.
//! - **Validation**: a sum type, either `Valid(value)` or `Invalid(errors)`
//!   where the errors are statically non-empty.
//! - **NonEmpty**: an ordered sequence guaranteed to hold at least one
//!   element, used as the error carrier.
//!
//! ## Modules
//!
//! - [`domain`] - the `Person` record, its input type and error enum
//! - [`validation`] - the generic `Validation`/`NonEmpty` carrier types
//!
//! ## Example
//!
//! ```
//! use person_validation::domain::{Person, ValidationError};
//! use person_validation::validation::Validation;
//!
//! // All rules pass:
//! let alice = Person::validate("Alice", 30);
//! assert!(alice.is_valid());
//!
//! // Two rules fail - both are reported, in rule order:
//! match Person::validate("", -1) {
//!     Validation::Valid(_) => unreachable!(),
//!     Validation::Invalid(errors) => {
//!         assert_eq!(
//!             errors.into_vec(),
//!             vec![ValidationError::BlankName, ValidationError::NegativeAge],
//!         );
//!     }
//! }
//! ```

pub mod domain;
pub mod validation;

pub use domain::{Person, PersonInput, ValidationError, ValidationResult, MAX_AGE};
pub use validation::{join_errors, NonEmpty, Validation};
