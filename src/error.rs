//! Error catalogue for failed refinements
//!
//! Every fallible construction in this crate reports a [`TypeError`],
//! and every failed decode wraps one (or a container-shape failure) in
//! a [`DecodeError`]. Keeping the wording in one place guarantees that
//! the or-result, or-null and or-panic shapes of the same type always
//! describe the same violation the same way.

use std::fmt;

use thiserror::Error;

/// A value was rejected by the invariant of the type it was offered to.
///
/// The messages carry the offending value where one exists, so a
/// surfaced error is actionable without extra context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TypeError {
    /// The value was below zero but a positive number was required.
    #[error("number should be positive (tried with {0})")]
    NotPositive(i32),

    /// The value was zero or below but a strictly positive number was
    /// required.
    #[error("number should be strictly positive (tried with {0})")]
    NotStrictlyPositive(i32),

    /// The value was above zero but a negative number was required.
    #[error("number should be negative (tried with {0})")]
    NotNegative(i32),

    /// The value was zero or above but a strictly negative number was
    /// required.
    #[error("number should be strictly negative (tried with {0})")]
    NotStrictlyNegative(i32),

    /// The value was zero but zero was excluded from the domain.
    #[error("number should be other than zero")]
    ZeroNumber,

    /// Negating the value would overflow the underlying integer.
    #[error("number should be negatable without overflow (tried with {0})")]
    OverflowingNegation(i32),

    /// The string contained no non-whitespace character.
    #[error("string should not be blank")]
    BlankString,

    /// The source collection held no elements.
    #[error("collection should not be empty")]
    EmptyCollection,

    /// The bounds describe a range that contains no value.
    #[error("range should not be empty")]
    EmptyRange,
}

/// A serialized payload failed re-validation while being decoded.
///
/// Decoding failures are deliberately distinct from construction
/// failures: a [`TypeError`] means the caller passed a bad value, a
/// `DecodeError` means the wire data did. The message always starts
/// with `unable to deserialize` so decode problems are recognizable in
/// logs regardless of the underlying violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to deserialize: {reason}")]
pub struct DecodeError {
    reason: String,
}

impl DecodeError {
    /// Wraps the underlying violation.
    pub fn new(reason: impl fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }

    /// The description of the underlying violation.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
