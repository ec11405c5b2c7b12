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

//! Comparison, classification, and clamping for `Float<T>`.
//!
//! The classification predicates inspect the sign and exponent bits rather
//! than comparing values, so they answer correctly for NaN payloads and
//! signed zeros where ordinary comparison cannot.

use std::cmp::Ordering;
use std::num::FpCategory;

use crate::float::Float;
use crate::primitive::float::FloatPrimitive;

impl<T> Float<T>
where
    T: FloatPrimitive,
{
    /// IEEE-754 `totalOrder`: a strict total order over every bit pattern.
    ///
    /// The sequence runs negative quiet NaN, negative signaling NaN,
    /// negative infinity, negative finite values, negative subnormals,
    /// negative zero, positive zero, positive subnormals, positive finite
    /// values, positive infinity, positive signaling NaN, positive quiet
    /// NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use ballast_num::F32;
    ///
    /// assert_eq!(F32::new(-0.0).total_cmp(F32::new(0.0)), Ordering::Less);
    /// assert_eq!(F32::INFINITY.total_cmp(F32::NAN), Ordering::Less);
    /// ```
    #[inline]
    pub fn total_cmp(self, other: Self) -> Ordering {
        self.value.total_cmp(other.value)
    }

    /// The larger of two values, ignoring NaN: if exactly one argument is
    /// NaN the other is returned; NaN results only from two NaN inputs.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    /// The smaller of two values, ignoring NaN.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// Restricts the value to `[min, max]`. A NaN receiver stays NaN.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::F64;
    ///
    /// assert_eq!(F64::new(5.0).clamp(F64::new(1.0), F64::new(10.0)), F64::new(5.0));
    /// assert_eq!(F64::new(-3.0).clamp(F64::new(1.0), F64::new(10.0)), F64::new(1.0));
    /// assert!(F64::NAN.clamp(F64::new(1.0), F64::new(10.0)).is_nan());
    /// ```
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(FloatPrimitive::clamp(self.value, min.value, max.value))
    }

    /// The IEEE category of the value: NaN, infinite, zero, subnormal, or
    /// normal.
    #[inline]
    pub fn classify(self) -> FpCategory {
        self.value.classify()
    }

    /// Whether the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    /// Whether the value is positive or negative infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.value.is_infinite()
    }

    /// Whether the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    /// Whether the value is normal: finite, nonzero, and not subnormal.
    #[inline]
    pub fn is_normal(self) -> bool {
        self.value.is_normal()
    }

    /// Whether the value is subnormal.
    #[inline]
    pub fn is_subnormal(self) -> bool {
        FloatPrimitive::is_subnormal(self.value)
    }

    /// Whether the sign bit is clear. True for `+0.0` and positive NaN.
    #[inline]
    pub fn is_sign_positive(self) -> bool {
        self.value.is_sign_positive()
    }

    /// Whether the sign bit is set. True for `-0.0` and negative NaN.
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.value.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::num::FpCategory;

    use crate::float::{F32, F64};

    #[test]
    fn test_total_cmp_sequence() {
        // Explicit bit patterns; the NAN constant's pattern is unspecified.
        let neg_qnan = F32::new(f32::from_bits(0xFFC0_0000));
        let neg_snan = F32::new(f32::from_bits(0xFF80_0001));
        let pos_snan = F32::new(f32::from_bits(0x7F80_0001));
        let pos_qnan = F32::new(f32::from_bits(0x7FC0_0000));
        let subnormal = F32::new(f32::from_bits(0x0000_0001));

        let ordered = [
            neg_qnan,
            neg_snan,
            F32::NEG_INFINITY,
            F32::new(-1.0),
            F32::new(-f32::MIN_POSITIVE / 2.0),
            F32::new(-0.0),
            F32::new(0.0),
            subnormal,
            F32::new(1.0),
            F32::INFINITY,
            pos_snan,
            pos_qnan,
        ];
        for window in ordered.windows(2) {
            assert_eq!(window[0].total_cmp(window[1]), Ordering::Less);
            assert_eq!(window[1].total_cmp(window[0]), Ordering::Greater);
        }
        for v in ordered {
            assert_eq!(v.total_cmp(v), Ordering::Equal);
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(F64::NAN.classify(), FpCategory::Nan);
        assert_eq!(F64::INFINITY.classify(), FpCategory::Infinite);
        assert_eq!(F64::new(0.0).classify(), FpCategory::Zero);
        assert_eq!(F64::new(-0.0).classify(), FpCategory::Zero);
        assert_eq!(F64::new(1.0).classify(), FpCategory::Normal);
        let tiny = F64::new(f64::from_bits(1));
        assert_eq!(tiny.classify(), FpCategory::Subnormal);
        assert!(tiny.is_subnormal());
        assert!(!tiny.is_normal());
    }

    #[test]
    fn test_predicates_on_nan() {
        assert!(F32::NAN.is_nan());
        assert!(!F32::NAN.is_finite());
        assert!(!F32::NAN.is_infinite());
        let neg_nan = F32::new(f32::from_bits(0xFFC0_0000));
        assert!(neg_nan.is_sign_negative());
        assert!(neg_nan.is_nan());
    }

    #[test]
    fn test_max_min_ignore_nan() {
        assert_eq!(F64::NAN.max(F64::new(2.0)), F64::new(2.0));
        assert_eq!(F64::new(2.0).max(F64::NAN), F64::new(2.0));
        assert_eq!(F64::NAN.min(F64::new(2.0)), F64::new(2.0));
        assert!(F64::NAN.max(F64::NAN).is_nan());
        assert_eq!(F64::new(1.0).max(F64::new(2.0)), F64::new(2.0));
        assert_eq!(F64::new(1.0).min(F64::new(2.0)), F64::new(1.0));
    }

    #[test]
    fn test_clamp_behavior() {
        assert_eq!(
            F64::new(11.0).clamp(F64::new(1.0), F64::new(10.0)),
            F64::new(10.0)
        );
        assert!(F64::NAN.clamp(F64::new(1.0), F64::new(10.0)).is_nan());
    }

    #[test]
    #[should_panic]
    fn test_clamp_inverted_bounds_panics() {
        let _ = F64::new(5.0).clamp(F64::new(10.0), F64::new(1.0));
    }

    #[test]
    #[should_panic]
    fn test_clamp_nan_bound_panics() {
        let _ = F64::new(5.0).clamp(F64::NAN, F64::new(1.0));
    }
}
