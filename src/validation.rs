//! Applicative validation carrier types.
//!
//! This module provides the generic machinery for error-accumulating
//! validation: a [`NonEmpty`] sequence that statically guarantees at least
//! one element, and a [`Validation`] sum type that is either a valid value
//! or a non-empty list of errors.
//!
//! Unlike `Result`, combining validations does not short-circuit: every
//! input is evaluated and all failures are merged, in order. The domain
//! layer only needs the fixed 3-ary combination, so that is all this module
//! offers — there is no variadic applicative abstraction here.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An ordered sequence that holds at least one element.
///
/// Used as the error carrier of [`Validation::Invalid`]: an invalid result
/// without any error is unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Create a sequence containing a single element.
    pub fn new(head: T) -> Self {
        NonEmpty {
            head,
            tail: Vec::new(),
        }
    }

    /// Build a sequence from a `Vec`, or `None` if the vec is empty.
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let head = items.remove(0);
        Some(NonEmpty { head, tail: items })
    }

    /// The first element. Always present.
    pub fn first(&self) -> &T {
        &self.head
    }

    /// Number of elements, always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; provided for API symmetry with std collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append a single element at the end.
    pub fn push(&mut self, item: T) {
        self.tail.push(item);
    }

    /// Append all elements of `other` at the end, preserving order.
    pub fn append(&mut self, other: NonEmpty<T>) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Consume the sequence into an ordinary `Vec` (never empty).
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(1 + self.tail.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }
}

impl<T> From<T> for NonEmpty<T> {
    fn from(head: T) -> Self {
        NonEmpty::new(head)
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> std::ops::Index<usize> for NonEmpty<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

/// Render errors as a single comma-separated string, in accumulation order.
pub fn join_errors<E: Display>(errors: &NonEmpty<E>) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Either a valid value or a non-empty ordered list of errors.
///
/// The applicative counterpart of `Result`: combinators merge errors from
/// all failed inputs instead of stopping at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validation<E, T> {
    /// All checks passed; carries the validated value.
    Valid(T),
    /// At least one check failed; carries every violation, in check order.
    Invalid(NonEmpty<E>),
}

impl<E, T> Validation<E, T> {
    /// Shorthand for `Validation::Valid`.
    pub fn valid(value: T) -> Self {
        Validation::Valid(value)
    }

    /// Build an `Invalid` from a single error.
    pub fn invalid(error: E) -> Self {
        Validation::Invalid(NonEmpty::new(error))
    }

    /// Validate a single condition: `Valid(value)` when `condition` holds,
    /// otherwise `Invalid` carrying exactly `error`.
    pub fn check(condition: bool, error: E, value: T) -> Self {
        if condition {
            Validation::Valid(value)
        } else {
            Validation::invalid(error)
        }
    }

    /// Whether this is the `Valid` branch.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Whether this is the `Invalid` branch.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    /// The accumulated errors, if invalid.
    pub fn errors(&self) -> Option<&NonEmpty<E>> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }

    /// Map over the valid value, leaving errors untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<E, U> {
        match self {
            Validation::Valid(value) => Validation::Valid(f(value)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Map over each error, leaving a valid value untouched.
    pub fn map_err<F>(self, f: impl Fn(E) -> F) -> Validation<F, T> {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => {
                let mut mapped = NonEmpty::new(f(errors.head));
                for e in errors.tail {
                    mapped.push(f(e));
                }
                Validation::Invalid(mapped)
            }
        }
    }

    /// Convert into a `Result`, losing nothing.
    pub fn into_result(self) -> Result<T, NonEmpty<E>> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }

    /// Combine three independent validations.
    ///
    /// All three inputs are always inspected; there is no short-circuiting.
    /// If every input is valid, `f` is applied to the three values. If any
    /// input is invalid, the result is `Invalid` with the errors of all
    /// invalid inputs merged in argument order.
    pub fn zip3<B, C, U>(
        self,
        b: Validation<E, B>,
        c: Validation<E, C>,
        f: impl FnOnce(T, B, C) -> U,
    ) -> Validation<E, U> {
        match (self, b, c) {
            (Validation::Valid(x), Validation::Valid(y), Validation::Valid(z)) => {
                Validation::Valid(f(x, y, z))
            }
            (a, b, c) => {
                let mut merged: Option<NonEmpty<E>> = None;
                for errors in [a.into_errors(), b.into_errors(), c.into_errors()]
                    .into_iter()
                    .flatten()
                {
                    match merged.as_mut() {
                        Some(acc) => acc.append(errors),
                        None => merged = Some(errors),
                    }
                }
                // At least one branch was invalid, so merged is populated.
                Validation::Invalid(merged.unwrap())
            }
        }
    }

    fn into_errors(self) -> Option<NonEmpty<E>> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }
}
