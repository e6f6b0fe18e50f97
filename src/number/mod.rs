//! The refined numeric family over `i32`
//!
//! Five nominal types partition sub-ranges of the signed 32-bit domain:
//!
//! | Type                    | Domain                               |
//! |-------------------------|--------------------------------------|
//! | [`PositiveInt`]         | `[0, i32::MAX]`                      |
//! | [`StrictlyPositiveInt`] | `[1, i32::MAX]`                      |
//! | [`NegativeInt`]         | `[i32::MIN, 0]`                      |
//! | [`StrictlyNegativeInt`] | `[i32::MIN, -1]`                     |
//! | [`NonZeroInt`]          | `[i32::MIN, -1]` and `[1, i32::MAX]` |
//!
//! Each type carries `MIN`/`MAX` constants, a [`random`](PositiveInt::random)
//! generator drawn uniformly from its domain, a published
//! [`range`](PositiveInt::range), and wrapping
//! [`incremented`](PositiveInt::incremented)/[`decremented`](PositiveInt::decremented)
//! steps. Conversions between siblings go through
//! [`refine_as`](crate::Refined::refine_as) and friends, since not every
//! value of one domain is representable in another; `TryFrom<i32>` and
//! `From<Self> for i32` cover the primitive boundary.
//!
//! Arithmetic follows sign-closure rules: same-sign addition and
//! sign-determined division stay typed, every other combination
//! degrades to raw `i32`.
//!
//! # Example
//!
//! ```rust
//! use veritype::{NonZeroInt, PositiveInt, StrictlyPositiveInt};
//! use veritype::number::NonZero;
//!
//! assert!(PositiveInt::new(0).is_ok());
//! assert!(PositiveInt::new(-1).is_err());
//!
//! // Wrapping steps at the domain edges.
//! assert_eq!(StrictlyPositiveInt::MAX.incremented(), StrictlyPositiveInt::MIN);
//!
//! // Sibling conversion re-validates.
//! let n = PositiveInt::new(8).unwrap();
//! let n: NonZeroInt = n.refine_as::<NonZero>().unwrap();
//! assert_eq!(i32::from(n), 8);
//! ```

mod arithmetic;

use rand::Rng;

use crate::error::TypeError;
use crate::range::NotEmptyRange;
use crate::refined::{Predicate, Refined};

/// Shared capability of the bounded integer family.
///
/// Exposes the domain edges as raw primitives and the conversion back
/// to `i32`, so generic code can work over any family member. For
/// [`NonZeroInt`] the edges span the full `i32` range even though zero
/// is excluded from the domain between them.
pub trait BoundedInt: Copy + Ord {
    /// Smallest primitive in the domain.
    const MIN_VALUE: i32;

    /// Largest primitive in the domain.
    const MAX_VALUE: i32;

    /// The underlying primitive.
    fn to_i32(self) -> i32;
}

macro_rules! bounded_int_family {
    ($(
        $(#[$predicate_doc:meta])*
        $predicate:ident => $alias:ident {
            min: $min:expr,
            max: $max:expr,
            accept: $accept:expr,
            reject: $reject:expr,
            description: $description:expr,
        }
    )+) => { $(
        $(#[$predicate_doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $predicate;

        impl Predicate<i32> for $predicate {
            fn check(value: &i32) -> Result<(), TypeError> {
                let accept: fn(i32) -> bool = $accept;
                if accept(*value) {
                    Ok(())
                } else {
                    let reject: fn(i32) -> TypeError = $reject;
                    Err(reject(*value))
                }
            }

            fn description() -> &'static str {
                $description
            }
        }

        #[doc = concat!("An `i32` guaranteed to satisfy [`", stringify!($predicate), "`].")]
        pub type $alias = Refined<i32, $predicate>;

        impl Refined<i32, $predicate> {
            /// The minimum value of this type.
            pub const MIN: Self = Self::new_unchecked($min);

            /// The maximum value of this type.
            pub const MAX: Self = Self::new_unchecked($max);

            /// Validates `value` and wraps it.
            ///
            /// This is the or-throw construction shape.
            ///
            /// # Panics
            ///
            /// Panics with the catalogue wording if `value` is outside
            /// the domain. Use [`new`](Self::new) or
            /// [`or_none`](Self::or_none) when invalid input is
            /// expected.
            pub fn or_panic(value: i32) -> Self {
                match Self::new(value) {
                    Ok(refined) => refined,
                    Err(e) => panic!("{e}"),
                }
            }

            /// Returns a value drawn uniformly from the whole domain.
            ///
            /// Safe to call from concurrent threads; no ordering between
            /// concurrent draws is guaranteed.
            pub fn random() -> Self {
                Self::new_unchecked(rand::rng().random_range($min..=$max))
            }

            /// The canonical domain of this type as a closed interval.
            pub fn range() -> NotEmptyRange<Self> {
                NotEmptyRange::inclusive(Self::MIN, Self::MAX)
                    .expect("domain edges are ordered")
            }

            /// Returns this value plus one, wrapping to
            /// [`MIN`](Self::MIN) past [`MAX`](Self::MAX).
            pub fn incremented(self) -> Self {
                let value = self.into_inner();
                if value == $max {
                    Self::MIN
                } else {
                    Self::new_unchecked(value + 1)
                }
            }

            /// Returns this value minus one, wrapping to
            /// [`MAX`](Self::MAX) past [`MIN`](Self::MIN).
            pub fn decremented(self) -> Self {
                let value = self.into_inner();
                if value == $min {
                    Self::MAX
                } else {
                    Self::new_unchecked(value - 1)
                }
            }
        }

        impl BoundedInt for Refined<i32, $predicate> {
            const MIN_VALUE: i32 = $min;
            const MAX_VALUE: i32 = $max;

            fn to_i32(self) -> i32 {
                self.into_inner()
            }
        }

        impl TryFrom<i32> for Refined<i32, $predicate> {
            type Error = TypeError;

            fn try_from(value: i32) -> Result<Self, TypeError> {
                Self::new(value)
            }
        }

        impl From<Refined<i32, $predicate>> for i32 {
            fn from(value: Refined<i32, $predicate>) -> i32 {
                value.into_inner()
            }
        }
    )+ };
}

bounded_int_family! {
    /// Membership in `[0, i32::MAX]`.
    Positive => PositiveInt {
        min: 0,
        max: i32::MAX,
        accept: |v| v >= 0,
        reject: TypeError::NotPositive,
        description: "positive number (>= 0)",
    }

    /// Membership in `[1, i32::MAX]`.
    StrictlyPositive => StrictlyPositiveInt {
        min: 1,
        max: i32::MAX,
        accept: |v| v > 0,
        reject: TypeError::NotStrictlyPositive,
        description: "strictly positive number (> 0)",
    }

    /// Membership in `[i32::MIN, 0]`.
    Negative => NegativeInt {
        min: i32::MIN,
        max: 0,
        accept: |v| v <= 0,
        reject: TypeError::NotNegative,
        description: "negative number (<= 0)",
    }

    /// Membership in `[i32::MIN, -1]`.
    StrictlyNegative => StrictlyNegativeInt {
        min: i32::MIN,
        max: -1,
        accept: |v| v < 0,
        reject: TypeError::NotStrictlyNegative,
        description: "strictly negative number (< 0)",
    }
}

/// Membership in `[i32::MIN, -1]` or `[1, i32::MAX]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero;

impl Predicate<i32> for NonZero {
    fn check(value: &i32) -> Result<(), TypeError> {
        if *value != 0 {
            Ok(())
        } else {
            Err(TypeError::ZeroNumber)
        }
    }

    fn description() -> &'static str {
        "number other than zero"
    }
}

/// An `i32` guaranteed to satisfy [`NonZero`].
///
/// Its domain is the only discontiguous one in the family, so the
/// wrapping steps and the random generator skip zero explicitly.
pub type NonZeroInt = Refined<i32, NonZero>;

impl Refined<i32, NonZero> {
    /// The minimum value of this type.
    pub const MIN: Self = Self::new_unchecked(i32::MIN);

    /// The maximum value of this type.
    pub const MAX: Self = Self::new_unchecked(i32::MAX);

    /// Validates `value` and wraps it.
    ///
    /// This is the or-throw construction shape.
    ///
    /// # Panics
    ///
    /// Panics with the catalogue wording if `value` is zero.
    pub fn or_panic(value: i32) -> Self {
        match Self::new(value) {
            Ok(refined) => refined,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns a value drawn uniformly from the union of the negative
    /// and positive sub-domains.
    ///
    /// Draws from a contiguous range one short of the full width, then
    /// shifts the non-negative half up by one, so every non-zero value
    /// keeps exactly the same probability mass.
    pub fn random() -> Self {
        let drawn: i32 = rand::rng().random_range(i32::MIN..=i32::MAX - 1);
        Self::new_unchecked(if drawn >= 0 { drawn + 1 } else { drawn })
    }

    /// The negative sub-domain, `[i32::MIN, -1]`.
    pub fn negative_range() -> NotEmptyRange<StrictlyNegativeInt> {
        StrictlyNegativeInt::range()
    }

    /// The positive sub-domain, `[1, i32::MAX]`.
    pub fn positive_range() -> NotEmptyRange<StrictlyPositiveInt> {
        StrictlyPositiveInt::range()
    }

    /// Returns this value plus one, skipping zero and wrapping to
    /// [`MIN`](Self::MIN) past [`MAX`](Self::MAX).
    pub fn incremented(self) -> Self {
        match self.into_inner() {
            -1 => Self::new_unchecked(1),
            v if v == i32::MAX => Self::MIN,
            v => Self::new_unchecked(v + 1),
        }
    }

    /// Returns this value minus one, skipping zero and wrapping to
    /// [`MAX`](Self::MAX) past [`MIN`](Self::MIN).
    pub fn decremented(self) -> Self {
        match self.into_inner() {
            1 => Self::new_unchecked(-1),
            v if v == i32::MIN => Self::MAX,
            v => Self::new_unchecked(v - 1),
        }
    }
}

impl BoundedInt for Refined<i32, NonZero> {
    const MIN_VALUE: i32 = i32::MIN;
    const MAX_VALUE: i32 = i32::MAX;

    fn to_i32(self) -> i32 {
        self.into_inner()
    }
}

impl TryFrom<i32> for Refined<i32, NonZero> {
    type Error = TypeError;

    fn try_from(value: i32) -> Result<Self, TypeError> {
        Self::new(value)
    }
}

impl From<Refined<i32, NonZero>> for i32 {
    fn from(value: Refined<i32, NonZero>) -> i32 {
        value.into_inner()
    }
}

// Comparisons against the raw primitive, both directions.
impl<P: Predicate<i32>> PartialEq<i32> for Refined<i32, P> {
    fn eq(&self, other: &i32) -> bool {
        self.get() == other
    }
}

impl<P: Predicate<i32>> PartialEq<Refined<i32, P>> for i32 {
    fn eq(&self, other: &Refined<i32, P>) -> bool {
        self == other.get()
    }
}

impl<P: Predicate<i32>> PartialOrd<i32> for Refined<i32, P> {
    fn partial_cmp(&self, other: &i32) -> Option<std::cmp::Ordering> {
        self.get().partial_cmp(other)
    }
}

impl<P: Predicate<i32>> PartialOrd<Refined<i32, P>> for i32 {
    fn partial_cmp(&self, other: &Refined<i32, P>) -> Option<std::cmp::Ordering> {
        self.partial_cmp(other.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains() {
        assert!(PositiveInt::new(0).is_ok());
        assert!(PositiveInt::new(i32::MAX).is_ok());
        assert_eq!(
            PositiveInt::new(-1).unwrap_err(),
            TypeError::NotPositive(-1)
        );

        assert!(StrictlyPositiveInt::new(1).is_ok());
        assert_eq!(
            StrictlyPositiveInt::new(0).unwrap_err(),
            TypeError::NotStrictlyPositive(0)
        );

        assert!(NegativeInt::new(0).is_ok());
        assert!(NegativeInt::new(i32::MIN).is_ok());
        assert!(NegativeInt::new(1).is_err());

        assert!(StrictlyNegativeInt::new(-1).is_ok());
        assert!(StrictlyNegativeInt::new(0).is_err());

        assert!(NonZeroInt::new(-1).is_ok());
        assert!(NonZeroInt::new(1).is_ok());
        assert_eq!(NonZeroInt::new(0).unwrap_err(), TypeError::ZeroNumber);
    }

    #[test]
    fn test_min_max_constants() {
        assert_eq!(PositiveInt::MIN, 0);
        assert_eq!(PositiveInt::MAX, i32::MAX);
        assert_eq!(StrictlyPositiveInt::MIN, 1);
        assert_eq!(NegativeInt::MAX, 0);
        assert_eq!(StrictlyNegativeInt::MAX, -1);
        assert_eq!(NonZeroInt::MIN, i32::MIN);
        assert_eq!(NonZeroInt::MAX, i32::MAX);
    }

    #[test]
    fn test_wraparound_increment() {
        assert_eq!(PositiveInt::MAX.incremented(), PositiveInt::MIN);
        assert_eq!(StrictlyPositiveInt::MAX.incremented(), StrictlyPositiveInt::MIN);
        assert_eq!(NegativeInt::MAX.incremented(), NegativeInt::MIN);
        assert_eq!(StrictlyNegativeInt::MAX.incremented(), StrictlyNegativeInt::MIN);
        assert_eq!(NonZeroInt::MAX.incremented(), NonZeroInt::MIN);

        assert_eq!(PositiveInt::or_panic(3).incremented(), 4);
    }

    #[test]
    fn test_wraparound_decrement() {
        assert_eq!(PositiveInt::MIN.decremented(), PositiveInt::MAX);
        assert_eq!(StrictlyPositiveInt::MIN.decremented(), StrictlyPositiveInt::MAX);
        assert_eq!(NegativeInt::MIN.decremented(), NegativeInt::MAX);
        assert_eq!(StrictlyNegativeInt::MIN.decremented(), StrictlyNegativeInt::MAX);
        assert_eq!(NonZeroInt::MIN.decremented(), NonZeroInt::MAX);
    }

    #[test]
    fn test_non_zero_steps_skip_zero() {
        assert_eq!(NonZeroInt::or_panic(-1).incremented(), 1);
        assert_eq!(NonZeroInt::or_panic(1).decremented(), -1);
    }

    #[test]
    fn test_random_stays_in_domain() {
        for _ in 0..1_000 {
            assert!(*PositiveInt::random().get() >= 0);
            assert!(*StrictlyPositiveInt::random().get() > 0);
            assert!(*NegativeInt::random().get() <= 0);
            assert!(*StrictlyNegativeInt::random().get() < 0);
            assert_ne!(*NonZeroInt::random().get(), 0);
        }
    }

    #[test]
    fn test_published_ranges() {
        let range = StrictlyPositiveInt::range();
        assert!(range.contains(&StrictlyPositiveInt::MIN));
        assert!(range.contains(&StrictlyPositiveInt::MAX));

        assert_eq!(NonZeroInt::positive_range().to_string(), "[1;2147483647]");
        assert_eq!(
            NonZeroInt::negative_range().to_string(),
            "[-2147483648;-1]"
        );
    }

    #[test]
    fn test_sibling_conversions() {
        let n = PositiveInt::or_panic(0);
        assert!(n.refine_as::<StrictlyPositive>().is_err());
        assert!(n.refine_as::<Negative>().is_ok());
        assert!(n.refine_as_or_none::<NonZero>().is_none());

        let n = StrictlyNegativeInt::or_panic(-7);
        let n: NonZeroInt = n.refine_as().unwrap();
        let n: NegativeInt = n.refine_as().unwrap();
        assert_eq!(n, -7);
    }

    #[test]
    fn test_primitive_boundary() {
        let n = StrictlyPositiveInt::try_from(5).unwrap();
        assert_eq!(i32::from(n), 5);
        assert!(StrictlyPositiveInt::try_from(-5).is_err());
    }

    #[test]
    #[should_panic(expected = "number should be strictly positive (tried with 0)")]
    fn test_or_panic_wording() {
        StrictlyPositiveInt::or_panic(0);
    }

    #[test]
    fn test_primitive_comparisons() {
        let n = PositiveInt::or_panic(4);
        assert_eq!(n, 4);
        assert_eq!(4, n);
        assert!(n < 5);
        assert!(3 < n);
    }
}
