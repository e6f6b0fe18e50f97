//! Bounded intervals over ordered refined types
//!
//! A [`NotEmptyRange`] pairs two [`Bound`]s of the same ordered type and
//! guarantees at construction that at least one value lies between
//! them. The numeric family uses it to publish each type's canonical
//! domain (see [`crate::number`]).
//!
//! # Example
//!
//! ```rust
//! use veritype::StrictlyPositiveInt;
//!
//! let range = StrictlyPositiveInt::range();
//! assert!(range.contains(&StrictlyPositiveInt::new(42).unwrap()));
//! assert_eq!(range.to_string(), "[1;2147483647]");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::TypeError;

/// One endpoint of a range, either part of the interval or excluded
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    /// The endpoint itself belongs to the interval.
    Inclusive(T),
    /// The interval stops just short of the endpoint.
    Exclusive(T),
}

impl<T> Bound<T> {
    /// The endpoint value, regardless of inclusion.
    pub fn value(&self) -> &T {
        match self {
            Bound::Inclusive(value) | Bound::Exclusive(value) => value,
        }
    }

    /// Whether the endpoint belongs to the interval.
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }
}

/// An interval over an ordered type, guaranteed non-empty at
/// construction.
///
/// The invariant is `start < end`, or `start == end` with both bounds
/// inclusive. Emptiness caused by two exclusive bounds around adjacent
/// values of a discrete type is not detectable for a generic `Ord` and
/// is accepted as a range whose membership test never succeeds.
///
/// # Example
///
/// ```rust
/// use veritype::{Bound, NotEmptyRange};
///
/// let range = NotEmptyRange::new(Bound::Inclusive(1), Bound::Exclusive(10)).unwrap();
/// assert!(range.contains(&1));
/// assert!(range.contains(&9));
/// assert!(!range.contains(&10));
///
/// // Reversed endpoints describe no value.
/// assert!(NotEmptyRange::new(Bound::Inclusive(10), Bound::Inclusive(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotEmptyRange<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: Ord> NotEmptyRange<T> {
    /// Validates the endpoints and builds the range, or reports why the
    /// interval would be empty.
    pub fn new(start: Bound<T>, end: Bound<T>) -> Result<Self, TypeError> {
        let valid = match start.value().cmp(end.value()) {
            Ordering::Less => true,
            Ordering::Equal => start.is_inclusive() && end.is_inclusive(),
            Ordering::Greater => false,
        };
        if valid {
            Ok(Self { start, end })
        } else {
            Err(TypeError::EmptyRange)
        }
    }

    /// Validates the endpoints and builds the range, or returns `None`.
    pub fn or_none(start: Bound<T>, end: Bound<T>) -> Option<Self> {
        Self::new(start, end).ok()
    }

    /// Builds the closed interval `[start, end]`.
    pub fn inclusive(start: T, end: T) -> Result<Self, TypeError> {
        Self::new(Bound::Inclusive(start), Bound::Inclusive(end))
    }

    /// Whether `value` satisfies both endpoint comparisons.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Inclusive(start) => value >= start,
            Bound::Exclusive(start) => value > start,
        };
        let below_end = match &self.end {
            Bound::Inclusive(end) => value <= end,
            Bound::Exclusive(end) => value < end,
        };
        above_start && below_end
    }
}

impl<T> NotEmptyRange<T> {
    /// The lower endpoint.
    pub fn start(&self) -> &Bound<T> {
        &self.start
    }

    /// The upper endpoint.
    pub fn end(&self) -> &Bound<T> {
        &self.end
    }
}

// Prints "[1;3]" for a closed interval; an excluded endpoint turns its
// bracket outward, as in "]1;3]".
impl<T: fmt::Display> fmt::Display for NotEmptyRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            Bound::Inclusive(value) => write!(f, "[{value};")?,
            Bound::Exclusive(value) => write!(f, "]{value};")?,
        }
        match &self.end {
            Bound::Inclusive(value) => write!(f, "{value}]"),
            Bound::Exclusive(value) => write!(f, "{value}["),
        }
    }
}
