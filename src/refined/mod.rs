//! The validated scalar mechanism
//!
//! This module implements the single validation gate every explicit type
//! in this crate goes through: a raw primitive plus a [`Predicate`]
//! either becomes a [`Refined`] value or a [`TypeError`]. Once a value
//! is refined it can never be observed holding an invalid primitive,
//! because no construction path skips the gate.
//!
//! # Construction shapes
//!
//! Every refined type offers the same three shapes:
//!
//! - `new(raw)` returns `Result<Self, TypeError>` and never panics;
//! - `or_none(raw)` returns `Option<Self>` and never panics;
//! - a panicking gate (`or_panic` on the numeric family,
//!   `from_vec_unchecked` on the containers) for call sites that
//!   consider invalid input a programming error.
//!
//! # Example
//!
//! ```rust
//! use veritype::{PositiveInt, StrictlyPositiveInt};
//!
//! let count = PositiveInt::new(0).unwrap();
//! assert_eq!(count.into_inner(), 0);
//!
//! // Conversions between siblings re-run the target predicate.
//! assert!(count.refine_as_or_none::<veritype::number::StrictlyPositive>().is_none());
//! let one = PositiveInt::new(1).unwrap();
//! let one: StrictlyPositiveInt = one.refine_as().unwrap();
//! assert_eq!(one.into_inner(), 1);
//! ```
//!
//! # Custom predicates
//!
//! The mechanism is open: any stateless predicate over a primitive can
//! define a new refined type.
//!
//! ```rust
//! use veritype::{Predicate, Refined, TypeError};
//!
//! pub struct Even;
//!
//! impl Predicate<i32> for Even {
//!     fn check(value: &i32) -> Result<(), TypeError> {
//!         if value % 2 == 0 {
//!             Ok(())
//!         } else {
//!             Err(TypeError::ZeroNumber) // reuse the closest catalogue entry
//!         }
//!     }
//! }
//!
//! type EvenInt = Refined<i32, Even>;
//! assert!(EvenInt::new(4).is_ok());
//! assert!(EvenInt::new(5).is_err());
//! ```

mod serde_impl;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::TypeError;

/// A validity rule over values of type `T`.
///
/// Predicates are stateless: they only define the check, the values
/// live in [`Refined<T, P>`]. A predicate must be pure and total over
/// the whole representable range of `T`.
pub trait Predicate<T>: Send + Sync + 'static {
    /// Checks whether `value` belongs to the refined domain.
    fn check(value: &T) -> Result<(), TypeError>;

    /// Human-readable description of what this predicate requires.
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type `T` guaranteed to satisfy predicate `P`.
///
/// The wrapper has the same memory layout as `T`; the predicate is a
/// zero-sized marker. Equality, ordering and hashing delegate to the
/// underlying primitive, so refined values sort and compare exactly
/// like the raw values they hold.
///
/// # Example
///
/// ```rust
/// use veritype::{NotBlankString, StrictlyPositiveInt};
///
/// fn label(n: StrictlyPositiveInt, name: &NotBlankString) -> String {
///     // No checks needed: both arguments are valid by construction.
///     format!("{n} {name}")
/// }
///
/// let n = StrictlyPositiveInt::new(3).unwrap();
/// let name = NotBlankString::new("widgets".to_string()).unwrap();
/// assert_eq!(label(n, &name), "3 widgets");
/// ```
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Validates `value` and wraps it, or reports why it was rejected.
    ///
    /// This is the or-result construction shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritype::NegativeInt;
    ///
    /// assert!(NegativeInt::new(-5).is_ok());
    /// assert!(NegativeInt::new(0).is_ok());
    /// assert!(NegativeInt::new(1).is_err());
    /// ```
    pub fn new(value: T) -> Result<Self, TypeError> {
        P::check(&value)?;
        Ok(Self {
            value,
            _predicate: PhantomData,
        })
    }

    /// Validates `value` and wraps it, or returns `None`.
    ///
    /// This is the or-null construction shape; it never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritype::NonZeroInt;
    ///
    /// assert!(NonZeroInt::or_none(7).is_some());
    /// assert!(NonZeroInt::or_none(0).is_none());
    /// ```
    pub fn or_none(value: T) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Wraps `value` without running the predicate.
    ///
    /// Not unsafe in the memory sense, but the caller must guarantee
    /// the predicate would pass; this exists for internal operations
    /// whose result is in-domain by construction (wrapping increments,
    /// closed arithmetic) and for values proven valid elsewhere.
    #[inline]
    pub const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Borrows the underlying primitive.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwraps the underlying primitive.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transforms the underlying primitive, re-running the predicate on
    /// the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritype::StrictlyPositiveInt;
    ///
    /// let n = StrictlyPositiveInt::new(2).unwrap();
    /// assert!(n.try_map(|x| x * 3).is_ok());
    /// assert!(StrictlyPositiveInt::new(1).unwrap().try_map(|x| x - 1).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, TypeError>
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }

    /// Converts to a sibling refined type over the same primitive,
    /// re-running the target predicate.
    ///
    /// This is the or-result shape of the conversion surface: not every
    /// value of one domain is representable in another.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritype::{NegativeInt, NonZeroInt};
    /// use veritype::number::NonZero;
    ///
    /// let n = NonZeroInt::new(-4).unwrap();
    /// let n: NegativeInt = n.refine_as().unwrap();
    /// assert_eq!(n.into_inner(), -4);
    ///
    /// // Zero is negative but not non-zero.
    /// assert!(NegativeInt::new(0).unwrap().refine_as::<NonZero>().is_err());
    /// ```
    pub fn refine_as<Q: Predicate<T>>(self) -> Result<Refined<T, Q>, TypeError> {
        Refined::new(self.value)
    }

    /// Converts to a sibling refined type, or returns `None`.
    pub fn refine_as_or_none<Q: Predicate<T>>(self) -> Option<Refined<T, Q>> {
        Refined::new(self.value).ok()
    }

    /// Converts to a sibling refined type.
    ///
    /// # Panics
    ///
    /// Panics if the value does not satisfy the target predicate. Use
    /// [`refine_as`](Self::refine_as) when the failure is expected.
    pub fn refine_as_or_panic<Q: Predicate<T>>(self) -> Refined<T, Q> {
        match Refined::new(self.value) {
            Ok(refined) => refined,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &P::description())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<T: Copy, P: Predicate<T>> Copy for Refined<T, P> {}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Predicate<i32> for Even {
        fn check(value: &i32) -> Result<(), TypeError> {
            if value % 2 == 0 {
                Ok(())
            } else {
                Err(TypeError::ZeroNumber)
            }
        }

        fn description() -> &'static str {
            "even number"
        }
    }

    struct Odd;

    impl Predicate<i32> for Odd {
        fn check(value: &i32) -> Result<(), TypeError> {
            if value % 2 != 0 {
                Ok(())
            } else {
                Err(TypeError::ZeroNumber)
            }
        }
    }

    type EvenInt = Refined<i32, Even>;

    #[test]
    fn test_new_accepts_valid_value() {
        let n = EvenInt::new(42).unwrap();
        assert_eq!(*n.get(), 42);
    }

    #[test]
    fn test_new_rejects_invalid_value() {
        assert!(EvenInt::new(41).is_err());
    }

    #[test]
    fn test_or_none_agrees_with_new() {
        assert_eq!(EvenInt::or_none(42).is_some(), EvenInt::new(42).is_ok());
        assert_eq!(EvenInt::or_none(41).is_some(), EvenInt::new(41).is_ok());
    }

    #[test]
    fn test_try_map_revalidates() {
        let n = EvenInt::new(42).unwrap();
        assert!(n.try_map(|x| x * 2).is_ok());
        let n = EvenInt::new(42).unwrap();
        assert!(n.try_map(|x| x + 1).is_err());
    }

    #[test]
    fn test_refine_as_between_siblings() {
        let even = EvenInt::new(42).unwrap();
        assert!(even.refine_as::<Odd>().is_err());

        let odd: Refined<i32, Odd> = Refined::new(41).unwrap();
        assert!(odd.refine_as_or_none::<Even>().is_none());
    }

    #[test]
    #[should_panic(expected = "number should be other than zero")]
    fn test_refine_as_or_panic_panics_on_mismatch() {
        let even = EvenInt::new(42).unwrap();
        let _: Refined<i32, Odd> = even.refine_as_or_panic();
    }

    #[test]
    fn test_equality_and_ordering_delegate() {
        let a = EvenInt::new(2).unwrap();
        let b = EvenInt::new(2).unwrap();
        let c = EvenInt::new(4).unwrap();
        assert_eq!(a, b);
        assert!(a < c);
    }

    #[test]
    fn test_hash_delegates() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(EvenInt::new(2).unwrap());
        set.insert(EvenInt::new(2).unwrap());
        set.insert(EvenInt::new(4).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_debug() {
        let n = EvenInt::new(42).unwrap();
        assert_eq!(format!("{n}"), "42");
        let debug = format!("{n:?}");
        assert!(debug.contains("42"));
        assert!(debug.contains("even number"));
    }

    #[test]
    fn test_copy_for_copy_primitives() {
        let n = EvenInt::new(2).unwrap();
        let copied = n;
        assert_eq!(n, copied);
    }
}
