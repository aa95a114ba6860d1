//! The `Person` record and its three validation rules.
//!
//! A [`Person`] can only be obtained through [`Person::validate`] (error
//! accumulating) or [`Person::new`] (fail-fast). Its fields are private and
//! it does not implement `Deserialize`, so every live instance satisfied
//! all three rules at construction time and stays valid for its whole
//! lifetime.
//!
//! The rules, in their fixed evaluation order:
//!
//! 1. `name` must not be blank (empty or whitespace-only after trimming)
//! 2. `age` must not be negative
//! 3. `age` must not exceed [`MAX_AGE`] (exactly 130 is allowed)
//!
//! The order is part of the contract: accumulated errors always appear in
//! rule order, and the fail-fast path reports the first rule that failed.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::validation::Validation;

/// The inclusive upper bound for a valid age.
pub const MAX_AGE: i32 = 130;

/// One violated validation rule.
///
/// The set is closed: exactly these three rules exist, and each contributes
/// at most one error per validation attempt. Equality is by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The name was empty or contained only whitespace.
    BlankName,
    /// The age was below zero.
    NegativeAge,
    /// The age was above [`MAX_AGE`].
    MaxAgeExceeded,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankName => {
                write!(f, "Name cannot be empty or contain only white space")
            }
            ValidationError::NegativeAge => write!(f, "Age cannot be negative"),
            ValidationError::MaxAgeExceeded => {
                write!(f, "Age cannot be bigger than {} years", MAX_AGE)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Raw candidate data for a [`Person`], not yet validated.
///
/// Typically deserialized from an external boundary and handed to
/// [`PersonInput::validate`]; discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    /// Candidate name; may be empty or whitespace-only.
    pub name: String,
    /// Candidate age; may be negative or arbitrarily large.
    pub age: i32,
}

impl PersonInput {
    /// Run all three rules against this input.
    pub fn validate(&self) -> ValidationResult {
        Person::validate(&self.name, self.age)
    }
}

/// A validated person record.
///
/// Immutable; the fields are exactly the inputs that passed validation.
/// The stored name is the original string, untrimmed — only the blank
/// check looks at a trimmed view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
    age: i32,
}

/// Outcome of validating person input: the record, or every violated rule
/// in rule order.
pub type ValidationResult = Validation<ValidationError, Person>;

impl Person {
    /// Validate `name` and `age` against all three rules, accumulating
    /// every violation.
    ///
    /// Each rule is evaluated independently; an earlier failure never
    /// suppresses a later check. The errors in the `Invalid` branch are
    /// ordered by rule: blank name, then negative age, then max age.
    ///
    /// # Example
    ///
    /// ```
    /// use person_validation::domain::{Person, ValidationError};
    ///
    /// let result = Person::validate("", -1);
    /// let errors = result.errors().unwrap();
    /// assert_eq!(
    ///     errors.iter().copied().collect::<Vec<_>>(),
    ///     vec![ValidationError::BlankName, ValidationError::NegativeAge],
    /// );
    /// ```
    pub fn validate(name: &str, age: i32) -> ValidationResult {
        let valid_name = Validation::check(
            !name.trim().is_empty(),
            ValidationError::BlankName,
            name.to_string(),
        );
        let valid_min_age = Validation::check(age >= 0, ValidationError::NegativeAge, age);
        let valid_max_age = Validation::check(age <= MAX_AGE, ValidationError::MaxAgeExceeded, age);

        valid_name.zip3(valid_min_age, valid_max_age, |name, age, _| Person {
            name,
            age,
        })
    }

    /// Fail-fast construction: stop at the first rule that fails.
    ///
    /// Same rules, same order as [`Person::validate`], but only the first
    /// violation is reported. Use this when a single error is enough and a
    /// plain `Result` fits the call site better.
    pub fn new(name: &str, age: i32) -> Result<Person, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if age < 0 {
            return Err(ValidationError::NegativeAge);
        }
        if age > MAX_AGE {
            return Err(ValidationError::MaxAgeExceeded);
        }
        Ok(Person {
            name: name.to_string(),
            age,
        })
    }

    /// The validated name, exactly as passed in (untrimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated age, in `0..=MAX_AGE`.
    pub fn age(&self) -> i32 {
        self.age
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name={}, age={})", self.name, self.age)
    }
}
