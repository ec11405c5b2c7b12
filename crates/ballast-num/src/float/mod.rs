// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Floating-Point Wrapper Family
//!
//! `Float<T>` wraps an IEEE-754 binary32 or binary64 value. Every bit
//! pattern is a valid value, NaN payloads, signed zeros, and subnormals
//! included; no invariant is enforced beyond that. Arithmetic maps straight
//! to the hardware float operations and follows IEEE semantics throughout,
//! so nothing here panics except `clamp` handed an invalid bound pair.
//!
//! Default comparison is the IEEE partial order (NaN compares false
//! everywhere); `total_cmp` provides the strict total order over all bit
//! patterns when one is needed for sorting.
//!
//! ## Example
//!
//! ```rust
//! use ballast_num::F64;
//!
//! let x = F64::new(-4.0);
//! assert!(x.sqrt().is_nan());
//! assert_eq!(x.abs(), F64::new(4.0));
//! assert_eq!(F64::new(5.0).clamp(F64::new(1.0), F64::new(10.0)), F64::new(5.0));
//! ```

use std::fmt;

use crate::primitive::float::FloatPrimitive;

mod bytes;
mod cmp;
mod math;
mod ops;

/// An IEEE-754 floating-point value.
///
/// A transparent wrapper over `f32` or `f64`. Equality and ordering follow
/// the IEEE partial order; use `total_cmp` for a total one. Classification
/// predicates are derived from the bit pattern, so they answer correctly
/// for NaN and signed zeros.
///
/// # Examples
///
/// ```rust
/// use ballast_num::F32;
///
/// assert!(F32::NAN.is_nan());
/// assert!(F32::new(-0.0) == F32::new(0.0));
/// assert!(F32::new(-0.0).is_sign_negative());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Float<T>
where
    T: FloatPrimitive,
{
    value: T,
}

/// A 32-bit IEEE-754 floating-point value.
pub type F32 = Float<f32>;
/// A 64-bit IEEE-754 floating-point value.
pub type F64 = Float<f64>;

impl<T> Float<T>
where
    T: FloatPrimitive,
{
    /// The radix of the internal significand representation.
    pub const RADIX: u32 = T::RADIX;
    /// Number of significant binary digits, hidden bit included.
    pub const MANTISSA_DIGITS: u32 = T::MANTISSA_DIGITS;
    /// Approximate number of significant decimal digits.
    pub const DIGITS: u32 = T::DIGITS;
    /// The machine epsilon.
    pub const EPSILON: Self = Self { value: T::EPSILON };
    /// The smallest (most negative) finite value.
    pub const MIN: Self = Self { value: T::MIN };
    /// The smallest positive normal value.
    pub const MIN_POSITIVE: Self = Self {
        value: T::MIN_POSITIVE,
    };
    /// The largest finite value.
    pub const MAX: Self = Self { value: T::MAX };
    /// The minimum binary exponent of a normal value.
    pub const MIN_EXP: i32 = T::MIN_EXP;
    /// The maximum binary exponent.
    pub const MAX_EXP: i32 = T::MAX_EXP;
    /// The minimum base-10 exponent yielding a normal value.
    pub const MIN_10_EXP: i32 = T::MIN_10_EXP;
    /// The maximum base-10 exponent.
    pub const MAX_10_EXP: i32 = T::MAX_10_EXP;
    /// A quiet Not-a-Number value.
    pub const NAN: Self = Self { value: T::NAN };
    /// Positive infinity.
    pub const INFINITY: Self = Self { value: T::INFINITY };
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self {
        value: T::NEG_INFINITY,
    };

    /// Euler's number, e.
    pub const E: Self = Self { value: T::E };
    /// Archimedes' constant, pi.
    pub const PI: Self = Self { value: T::PI };
    /// The full circle constant, 2*pi.
    pub const TAU: Self = Self { value: T::TAU };
    /// sqrt(2).
    pub const SQRT_2: Self = Self { value: T::SQRT_2 };
    /// 1/sqrt(2).
    pub const FRAC_1_SQRT_2: Self = Self {
        value: T::FRAC_1_SQRT_2,
    };
    /// ln(2).
    pub const LN_2: Self = Self { value: T::LN_2 };
    /// ln(10).
    pub const LN_10: Self = Self { value: T::LN_10 };
    /// log2(e).
    pub const LOG2_E: Self = Self { value: T::LOG2_E };
    /// log10(e).
    pub const LOG10_E: Self = Self { value: T::LOG10_E };
    /// log2(10).
    pub const LOG2_10: Self = Self { value: T::LOG2_10 };
    /// log10(2).
    pub const LOG10_2: Self = Self { value: T::LOG10_2 };
    /// pi/2.
    pub const FRAC_PI_2: Self = Self { value: T::FRAC_PI_2 };
    /// pi/3.
    pub const FRAC_PI_3: Self = Self { value: T::FRAC_PI_3 };
    /// pi/4.
    pub const FRAC_PI_4: Self = Self { value: T::FRAC_PI_4 };
    /// pi/6.
    pub const FRAC_PI_6: Self = Self { value: T::FRAC_PI_6 };
    /// pi/8.
    pub const FRAC_PI_8: Self = Self { value: T::FRAC_PI_8 };
    /// 1/pi.
    pub const FRAC_1_PI: Self = Self { value: T::FRAC_1_PI };
    /// 2/pi.
    pub const FRAC_2_PI: Self = Self { value: T::FRAC_2_PI };
    /// 2/sqrt(pi).
    pub const FRAC_2_SQRT_PI: Self = Self {
        value: T::FRAC_2_SQRT_PI,
    };

    /// Wraps a primitive value.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the underlying primitive value.
    #[inline(always)]
    pub const fn get(self) -> T {
        self.value
    }
}

impl<T> From<T> for Float<T>
where
    T: FloatPrimitive,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! float_into_primitive_impl {
    ($t:ty) => {
        impl From<Float<$t>> for $t {
            #[inline(always)]
            fn from(v: Float<$t>) -> $t {
                v.get()
            }
        }
    };
}

float_into_primitive_impl!(f32);
float_into_primitive_impl!(f64);

macro_rules! float_fmt_impl {
    ($fmt_trait:ident) => {
        impl<T> fmt::$fmt_trait for Float<T>
        where
            T: FloatPrimitive,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$fmt_trait::fmt(&self.value, f)
            }
        }
    };
}

float_fmt_impl!(Debug);
float_fmt_impl!(Display);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(F32::RADIX, 2);
        assert_eq!(F32::MANTISSA_DIGITS, 24);
        assert_eq!(F64::MANTISSA_DIGITS, 53);
        assert_eq!(F64::DIGITS, 15);
        assert_eq!(F32::MAX.get(), f32::MAX);
        assert_eq!(F64::EPSILON.get(), f64::EPSILON);
        assert_eq!(F64::MIN_POSITIVE.get(), f64::MIN_POSITIVE);
        assert_eq!(F64::MAX_EXP, 1024);
        assert!(F64::NAN.is_nan());
        assert_eq!(F64::PI.get(), std::f64::consts::PI);
        assert_eq!(F32::TAU.get(), std::f32::consts::TAU);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(F64::default(), F64::new(0.0));
        assert!(F64::default().is_sign_positive());
    }

    #[test]
    fn test_partial_order_with_nan() {
        assert!(F64::new(1.0) < F64::new(2.0));
        assert!(!(F64::NAN == F64::NAN));
        assert!(!(F64::NAN < F64::new(1.0)));
        assert!(!(F64::NAN > F64::new(1.0)));
    }

    #[test]
    fn test_signed_zero_equality() {
        assert!(F64::new(-0.0) == F64::new(0.0));
        assert!(F64::new(-0.0).is_sign_negative());
        assert!(F64::new(0.0).is_sign_positive());
    }

    #[test]
    fn test_formatting_delegates() {
        assert_eq!(format!("{}", F64::new(1.5)), "1.5");
        assert_eq!(format!("{:?}", F32::new(-0.5)), "-0.5");
    }
}
