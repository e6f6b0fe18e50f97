//! Sign-closure arithmetic for the numeric family
//!
//! The closure rules, applied uniformly:
//!
//! - Adding two values of the same sign-guaranteed type stays in that
//!   type. The sum saturates at the domain edge, so two's-complement
//!   wraparound can never smuggle an out-of-domain value into the
//!   wrapper.
//! - Division stays typed whenever the divisor's sign pins down the
//!   quotient's sign: a positive-family value divided by a
//!   positive-family value is a [`PositiveInt`], divided by a
//!   negative-family value is a [`NegativeInt`], and the negative
//!   family mirrors this. Quotients truncate toward zero.
//! - Every other combination, and any combination with a raw `i32` on
//!   either side, yields a raw `i32`: mixing refined and raw never
//!   re-validates automatically.
//! - Negating a [`PositiveInt`] or a [`StrictlyPositiveInt`] is total.
//!   The opposite direction goes through [`NegativeInt::negated`],
//!   which fails explicitly on `i32::MIN` instead of overflowing.
//!
//! Division panics follow the standard `i32` rules: a zero divisor
//! panics (only reachable when the divisor's domain contains zero, or
//! when dividing by a raw zero), and so does `i32::MIN / -1`. A divisor
//! whose domain excludes zero can never raise a divide-by-zero.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{NegativeInt, NonZeroInt, PositiveInt, StrictlyNegativeInt, StrictlyPositiveInt};
use crate::error::TypeError;
use crate::refined::{Predicate, Refined};

trait Raw {
    fn raw(self) -> i32;
}

impl Raw for i32 {
    fn raw(self) -> i32 {
        self
    }
}

impl<P: Predicate<i32>> Raw for Refined<i32, P> {
    fn raw(self) -> i32 {
        self.into_inner()
    }
}

// Same-sign addition closes onto the shared type; saturation keeps the
// sum inside the domain at the edges.
macro_rules! closed_add {
    ($($ty:ty),+ $(,)?) => { $(
        impl Add for $ty {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                <$ty>::new_unchecked(self.raw().saturating_add(rhs.raw()))
            }
        }
    )+ };
}

closed_add!(PositiveInt, StrictlyPositiveInt, NegativeInt, StrictlyNegativeInt);

// Division keyed on the divisor's sign; truncation toward zero keeps
// each quotient inside the output domain.
macro_rules! closed_div {
    ($(($lhs:ty, $rhs:ty) => $out:ty),+ $(,)?) => { $(
        impl Div<$rhs> for $lhs {
            type Output = $out;

            fn div(self, rhs: $rhs) -> $out {
                <$out>::new_unchecked(self.raw() / rhs.raw())
            }
        }
    )+ };
}

closed_div! {
    (PositiveInt, PositiveInt) => PositiveInt,
    (PositiveInt, StrictlyPositiveInt) => PositiveInt,
    (PositiveInt, NegativeInt) => NegativeInt,
    (PositiveInt, StrictlyNegativeInt) => NegativeInt,
    (StrictlyPositiveInt, PositiveInt) => PositiveInt,
    (StrictlyPositiveInt, StrictlyPositiveInt) => PositiveInt,
    (StrictlyPositiveInt, NegativeInt) => NegativeInt,
    (StrictlyPositiveInt, StrictlyNegativeInt) => NegativeInt,
    (NegativeInt, PositiveInt) => NegativeInt,
    (NegativeInt, StrictlyPositiveInt) => NegativeInt,
    (NegativeInt, NegativeInt) => PositiveInt,
    (NegativeInt, StrictlyNegativeInt) => PositiveInt,
    (StrictlyNegativeInt, PositiveInt) => NegativeInt,
    (StrictlyNegativeInt, StrictlyPositiveInt) => NegativeInt,
    (StrictlyNegativeInt, NegativeInt) => PositiveInt,
    (StrictlyNegativeInt, StrictlyNegativeInt) => PositiveInt,
}

// Everything else degrades to the raw primitive.
macro_rules! raw_binop {
    ($trait:ident :: $method:ident, [$(($lhs:ty, $rhs:ty)),+ $(,)?]) => { $(
        impl $trait<$rhs> for $lhs {
            type Output = i32;

            fn $method(self, rhs: $rhs) -> i32 {
                $trait::$method(self.raw(), rhs.raw())
            }
        }
    )+ };
}

raw_binop!(Add::add, [
    (PositiveInt, StrictlyPositiveInt),
    (PositiveInt, NegativeInt),
    (PositiveInt, StrictlyNegativeInt),
    (PositiveInt, NonZeroInt),
    (StrictlyPositiveInt, PositiveInt),
    (StrictlyPositiveInt, NegativeInt),
    (StrictlyPositiveInt, StrictlyNegativeInt),
    (StrictlyPositiveInt, NonZeroInt),
    (NegativeInt, PositiveInt),
    (NegativeInt, StrictlyPositiveInt),
    (NegativeInt, StrictlyNegativeInt),
    (NegativeInt, NonZeroInt),
    (StrictlyNegativeInt, PositiveInt),
    (StrictlyNegativeInt, StrictlyPositiveInt),
    (StrictlyNegativeInt, NegativeInt),
    (StrictlyNegativeInt, NonZeroInt),
    (NonZeroInt, PositiveInt),
    (NonZeroInt, StrictlyPositiveInt),
    (NonZeroInt, NegativeInt),
    (NonZeroInt, StrictlyNegativeInt),
    (NonZeroInt, NonZeroInt),
    (PositiveInt, i32),
    (StrictlyPositiveInt, i32),
    (NegativeInt, i32),
    (StrictlyNegativeInt, i32),
    (NonZeroInt, i32),
    (i32, PositiveInt),
    (i32, StrictlyPositiveInt),
    (i32, NegativeInt),
    (i32, StrictlyNegativeInt),
    (i32, NonZeroInt),
]);

raw_binop!(Sub::sub, [
    (PositiveInt, PositiveInt),
    (PositiveInt, StrictlyPositiveInt),
    (PositiveInt, NegativeInt),
    (PositiveInt, StrictlyNegativeInt),
    (PositiveInt, NonZeroInt),
    (StrictlyPositiveInt, PositiveInt),
    (StrictlyPositiveInt, StrictlyPositiveInt),
    (StrictlyPositiveInt, NegativeInt),
    (StrictlyPositiveInt, StrictlyNegativeInt),
    (StrictlyPositiveInt, NonZeroInt),
    (NegativeInt, PositiveInt),
    (NegativeInt, StrictlyPositiveInt),
    (NegativeInt, NegativeInt),
    (NegativeInt, StrictlyNegativeInt),
    (NegativeInt, NonZeroInt),
    (StrictlyNegativeInt, PositiveInt),
    (StrictlyNegativeInt, StrictlyPositiveInt),
    (StrictlyNegativeInt, NegativeInt),
    (StrictlyNegativeInt, StrictlyNegativeInt),
    (StrictlyNegativeInt, NonZeroInt),
    (NonZeroInt, PositiveInt),
    (NonZeroInt, StrictlyPositiveInt),
    (NonZeroInt, NegativeInt),
    (NonZeroInt, StrictlyNegativeInt),
    (NonZeroInt, NonZeroInt),
    (PositiveInt, i32),
    (StrictlyPositiveInt, i32),
    (NegativeInt, i32),
    (StrictlyNegativeInt, i32),
    (NonZeroInt, i32),
    (i32, PositiveInt),
    (i32, StrictlyPositiveInt),
    (i32, NegativeInt),
    (i32, StrictlyNegativeInt),
    (i32, NonZeroInt),
]);

raw_binop!(Mul::mul, [
    (PositiveInt, PositiveInt),
    (PositiveInt, StrictlyPositiveInt),
    (PositiveInt, NegativeInt),
    (PositiveInt, StrictlyNegativeInt),
    (PositiveInt, NonZeroInt),
    (StrictlyPositiveInt, PositiveInt),
    (StrictlyPositiveInt, StrictlyPositiveInt),
    (StrictlyPositiveInt, NegativeInt),
    (StrictlyPositiveInt, StrictlyNegativeInt),
    (StrictlyPositiveInt, NonZeroInt),
    (NegativeInt, PositiveInt),
    (NegativeInt, StrictlyPositiveInt),
    (NegativeInt, NegativeInt),
    (NegativeInt, StrictlyNegativeInt),
    (NegativeInt, NonZeroInt),
    (StrictlyNegativeInt, PositiveInt),
    (StrictlyNegativeInt, StrictlyPositiveInt),
    (StrictlyNegativeInt, NegativeInt),
    (StrictlyNegativeInt, StrictlyNegativeInt),
    (StrictlyNegativeInt, NonZeroInt),
    (NonZeroInt, PositiveInt),
    (NonZeroInt, StrictlyPositiveInt),
    (NonZeroInt, NegativeInt),
    (NonZeroInt, StrictlyNegativeInt),
    (NonZeroInt, NonZeroInt),
    (PositiveInt, i32),
    (StrictlyPositiveInt, i32),
    (NegativeInt, i32),
    (StrictlyNegativeInt, i32),
    (NonZeroInt, i32),
    (i32, PositiveInt),
    (i32, StrictlyPositiveInt),
    (i32, NegativeInt),
    (i32, StrictlyNegativeInt),
    (i32, NonZeroInt),
]);

raw_binop!(Div::div, [
    (NonZeroInt, PositiveInt),
    (NonZeroInt, StrictlyPositiveInt),
    (NonZeroInt, NegativeInt),
    (NonZeroInt, StrictlyNegativeInt),
    (NonZeroInt, NonZeroInt),
    (PositiveInt, NonZeroInt),
    (StrictlyPositiveInt, NonZeroInt),
    (NegativeInt, NonZeroInt),
    (StrictlyNegativeInt, NonZeroInt),
    (PositiveInt, i32),
    (StrictlyPositiveInt, i32),
    (NegativeInt, i32),
    (StrictlyNegativeInt, i32),
    (NonZeroInt, i32),
    (i32, PositiveInt),
    (i32, StrictlyPositiveInt),
    (i32, NegativeInt),
    (i32, StrictlyNegativeInt),
    (i32, NonZeroInt),
]);

// Total negation: the positive domains never contain i32::MIN, so the
// result always fits the paired negative domain.
impl Neg for PositiveInt {
    type Output = NegativeInt;

    fn neg(self) -> NegativeInt {
        NegativeInt::new_unchecked(-self.raw())
    }
}

impl Neg for StrictlyPositiveInt {
    type Output = StrictlyNegativeInt;

    fn neg(self) -> StrictlyNegativeInt {
        StrictlyNegativeInt::new_unchecked(-self.raw())
    }
}

impl NegativeInt {
    /// Returns the negation of this value as a [`PositiveInt`].
    ///
    /// Fails on `i32::MIN`, whose negation is one past `i32::MAX`; the
    /// domains are symmetric around zero everywhere else.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veritype::{NegativeInt, TypeError};
    ///
    /// let n = NegativeInt::new(-3).unwrap();
    /// assert_eq!(n.negated().unwrap(), 3);
    ///
    /// assert_eq!(
    ///     NegativeInt::MIN.negated().unwrap_err(),
    ///     TypeError::OverflowingNegation(i32::MIN),
    /// );
    /// ```
    pub fn negated(self) -> Result<PositiveInt, TypeError> {
        let value = self.raw();
        if value == i32::MIN {
            Err(TypeError::OverflowingNegation(value))
        } else {
            Ok(PositiveInt::new_unchecked(-value))
        }
    }
}

impl StrictlyNegativeInt {
    /// Returns the negation of this value as a [`StrictlyPositiveInt`].
    ///
    /// Fails on `i32::MIN`, whose negation is one past `i32::MAX`.
    pub fn negated(self) -> Result<StrictlyPositiveInt, TypeError> {
        let value = self.raw();
        if value == i32::MIN {
            Err(TypeError::OverflowingNegation(value))
        } else {
            Ok(StrictlyPositiveInt::new_unchecked(-value))
        }
    }
}

impl NonZeroInt {
    /// Returns the negation of this value.
    ///
    /// Fails on `i32::MIN`, whose negation is one past `i32::MAX`;
    /// every other non-zero value negates to a non-zero value.
    pub fn negated(self) -> Result<NonZeroInt, TypeError> {
        let value = self.raw();
        if value == i32::MIN {
            Err(TypeError::OverflowingNegation(value))
        } else {
            Ok(NonZeroInt::new_unchecked(-value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_sign_addition_stays_typed() {
        let sum: PositiveInt = PositiveInt::or_panic(2) + PositiveInt::or_panic(3);
        assert_eq!(sum, 5);

        let sum: StrictlyNegativeInt =
            StrictlyNegativeInt::or_panic(-2) + StrictlyNegativeInt::or_panic(-3);
        assert_eq!(sum, -5);
    }

    #[test]
    fn test_addition_saturates_at_domain_edge() {
        let sum = StrictlyPositiveInt::MAX + StrictlyPositiveInt::or_panic(1);
        assert_eq!(sum, StrictlyPositiveInt::MAX);

        let sum = NegativeInt::MIN + NegativeInt::or_panic(-1);
        assert_eq!(sum, NegativeInt::MIN);
    }

    #[test]
    fn test_mixed_addition_degrades_to_i32() {
        let sum: i32 = PositiveInt::or_panic(2) + NegativeInt::or_panic(-3);
        assert_eq!(sum, -1);

        let sum: i32 = NonZeroInt::or_panic(4) + NonZeroInt::or_panic(-4);
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_primitive_operands_degrade_to_i32() {
        let n = StrictlyPositiveInt::or_panic(10);
        assert_eq!(n + 1, 11);
        assert_eq!(1 + n, 11);
        assert_eq!(n - 15, -5);
        assert_eq!(3 * n, 30);
        assert_eq!(n / 3, 3);
    }

    #[test]
    fn test_subtraction_never_stays_typed() {
        // Same-sign subtraction can change sign, so it yields i32.
        let diff: i32 = PositiveInt::or_panic(2) - PositiveInt::or_panic(5);
        assert_eq!(diff, -3);
    }

    #[test]
    fn test_division_typed_by_divisor_sign() {
        let q: NegativeInt = PositiveInt::or_panic(4) / NegativeInt::or_panic(-2);
        assert_eq!(q, -2);

        let q: PositiveInt = PositiveInt::or_panic(4) / StrictlyPositiveInt::or_panic(2);
        assert_eq!(q, 2);

        let q: NegativeInt = StrictlyNegativeInt::or_panic(-9) / StrictlyPositiveInt::or_panic(2);
        assert_eq!(q, -4);

        let q: PositiveInt = NegativeInt::or_panic(-9) / StrictlyNegativeInt::or_panic(-2);
        assert_eq!(q, 4);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let q: PositiveInt = StrictlyPositiveInt::or_panic(1) / StrictlyPositiveInt::or_panic(2);
        assert_eq!(q, 0);

        let q: NegativeInt = StrictlyPositiveInt::or_panic(1) / StrictlyNegativeInt::or_panic(-2);
        assert_eq!(q, 0);
    }

    #[test]
    fn test_division_by_zero_excluding_divisor_is_safe() {
        let q: i32 = 10 / NonZeroInt::or_panic(-5);
        assert_eq!(q, -2);

        let q: i32 = NonZeroInt::or_panic(10) / NonZeroInt::or_panic(3);
        assert_eq!(q, 3);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_division_by_zero_holding_refined_panics() {
        let _ = PositiveInt::or_panic(4) / NegativeInt::or_panic(0);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_division_by_primitive_zero_panics() {
        let _ = PositiveInt::or_panic(4) / 0;
    }

    #[test]
    fn test_total_negation() {
        let n: NegativeInt = -PositiveInt::or_panic(5);
        assert_eq!(n, -5);

        let n: StrictlyNegativeInt = -StrictlyPositiveInt::MAX;
        assert_eq!(n, -i32::MAX);

        // Zero is its own negation.
        let n: NegativeInt = -PositiveInt::or_panic(0);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_fallible_negation_rejects_min() {
        assert_eq!(
            NegativeInt::MIN.negated().unwrap_err(),
            TypeError::OverflowingNegation(i32::MIN)
        );
        assert_eq!(
            StrictlyNegativeInt::MIN.negated().unwrap_err(),
            TypeError::OverflowingNegation(i32::MIN)
        );
        assert_eq!(
            NonZeroInt::MIN.negated().unwrap_err(),
            TypeError::OverflowingNegation(i32::MIN)
        );

        assert_eq!(StrictlyNegativeInt::or_panic(-8).negated().unwrap(), 8);
        assert_eq!(NonZeroInt::or_panic(8).negated().unwrap(), -8);
    }
}
