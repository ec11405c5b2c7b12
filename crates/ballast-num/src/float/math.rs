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

//! Mathematical functions for `Float<T>`.
//!
//! Rounding, transcendental, trigonometric, and hyperbolic functions,
//! delegating to the standard floating-point math. Inputs outside a
//! function's domain yield NaN per IEEE-754; nothing here panics.

use crate::float::Float;
use crate::primitive::float::FloatPrimitive;

impl<T> Float<T>
where
    T: FloatPrimitive,
{
    /// The largest integer less than or equal to the value.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.value.floor())
    }

    /// The smallest integer greater than or equal to the value.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.value.ceil())
    }

    /// The nearest integer, with ties rounded away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.value.round())
    }

    /// The integer part of the value, toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        Self::new(self.value.trunc())
    }

    /// The fractional part of the value, with the sign of the receiver.
    #[inline]
    pub fn fract(self) -> Self {
        Self::new(self.value.fract())
    }

    /// The absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// `1.0` with the sign of the receiver; NaN stays NaN.
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.value.signum())
    }

    /// The magnitude of the receiver with the sign of `sign`.
    #[inline]
    pub fn copysign(self, sign: Self) -> Self {
        Self::new(self.value.copysign(sign.value))
    }

    /// Fused multiply-add: `self * a + b` with a single rounding step.
    #[inline]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        Self::new(self.value.mul_add(a.value, b.value))
    }

    /// The reciprocal, `1 / self`.
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.value.recip())
    }

    /// Raises to an integer power. More accurate than `powf` for integral
    /// exponents.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        Self::new(self.value.powi(n))
    }

    /// Raises to a floating-point power.
    #[inline]
    pub fn powf(self, n: Self) -> Self {
        Self::new(self.value.powf(n.value))
    }

    /// The square root. Negative nonzero inputs yield NaN; `sqrt(-0.0)` is
    /// `-0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::F64;
    ///
    /// assert_eq!(F64::new(9.0).sqrt(), F64::new(3.0));
    /// assert!(F64::new(-4.0).sqrt().is_nan());
    /// ```
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.value.sqrt())
    }

    /// The cube root. Defined for negative inputs.
    #[inline]
    pub fn cbrt(self) -> Self {
        Self::new(self.value.cbrt())
    }

    /// The length of the hypotenuse of a right triangle with legs `self`
    /// and `other`.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        Self::new(self.value.hypot(other.value))
    }

    /// e raised to the power of the value.
    #[inline]
    pub fn exp(self) -> Self {
        Self::new(self.value.exp())
    }

    /// 2 raised to the power of the value.
    #[inline]
    pub fn exp2(self) -> Self {
        Self::new(self.value.exp2())
    }

    /// `exp(self) - 1`, accurate near zero.
    #[inline]
    pub fn exp_m1(self) -> Self {
        Self::new(self.value.exp_m1())
    }

    /// The natural logarithm. Zero yields negative infinity; negative
    /// inputs yield NaN.
    #[inline]
    pub fn ln(self) -> Self {
        Self::new(self.value.ln())
    }

    /// `ln(1 + self)`, accurate near zero.
    #[inline]
    pub fn ln_1p(self) -> Self {
        Self::new(self.value.ln_1p())
    }

    /// The logarithm with respect to an arbitrary base.
    #[inline]
    pub fn log(self, base: Self) -> Self {
        Self::new(self.value.log(base.value))
    }

    /// The base-2 logarithm.
    #[inline]
    pub fn log2(self) -> Self {
        Self::new(self.value.log2())
    }

    /// The base-10 logarithm.
    #[inline]
    pub fn log10(self) -> Self {
        Self::new(self.value.log10())
    }

    /// The sine, in radians.
    #[inline]
    pub fn sin(self) -> Self {
        Self::new(self.value.sin())
    }

    /// The cosine, in radians.
    #[inline]
    pub fn cos(self) -> Self {
        Self::new(self.value.cos())
    }

    /// The tangent, in radians.
    #[inline]
    pub fn tan(self) -> Self {
        Self::new(self.value.tan())
    }

    /// The arcsine, in `[-pi/2, pi/2]`. Inputs outside `[-1, 1]` yield NaN.
    #[inline]
    pub fn asin(self) -> Self {
        Self::new(self.value.asin())
    }

    /// The arccosine, in `[0, pi]`. Inputs outside `[-1, 1]` yield NaN.
    #[inline]
    pub fn acos(self) -> Self {
        Self::new(self.value.acos())
    }

    /// The arctangent, in `(-pi/2, pi/2)`.
    #[inline]
    pub fn atan(self) -> Self {
        Self::new(self.value.atan())
    }

    /// The four-quadrant arctangent of `self` (y) and `other` (x), in
    /// `(-pi, pi]`.
    #[inline]
    pub fn atan2(self, other: Self) -> Self {
        Self::new(self.value.atan2(other.value))
    }

    /// The hyperbolic sine.
    #[inline]
    pub fn sinh(self) -> Self {
        Self::new(self.value.sinh())
    }

    /// The hyperbolic cosine.
    #[inline]
    pub fn cosh(self) -> Self {
        Self::new(self.value.cosh())
    }

    /// The hyperbolic tangent.
    #[inline]
    pub fn tanh(self) -> Self {
        Self::new(self.value.tanh())
    }

    /// The inverse hyperbolic sine.
    #[inline]
    pub fn asinh(self) -> Self {
        Self::new(self.value.asinh())
    }

    /// The inverse hyperbolic cosine. Inputs below `1` yield NaN.
    #[inline]
    pub fn acosh(self) -> Self {
        Self::new(self.value.acosh())
    }

    /// The inverse hyperbolic tangent. Inputs outside `(-1, 1)` yield NaN
    /// or an infinity at the boundary.
    #[inline]
    pub fn atanh(self) -> Self {
        Self::new(self.value.atanh())
    }

    /// Converts radians to degrees.
    #[inline]
    pub fn to_degrees(self) -> Self {
        Self::new(self.value.to_degrees())
    }

    /// Converts degrees to radians.
    #[inline]
    pub fn to_radians(self) -> Self {
        Self::new(self.value.to_radians())
    }

    /// Euclidean division, computed with `trunc` and a correction step so
    /// that `self = q * rhs + r` with `0 <= r < |rhs|`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::F64;
    ///
    /// assert_eq!(F64::new(-7.0).div_euclid(F64::new(4.0)), F64::new(-2.0));
    /// assert_eq!(F64::new(-7.0).rem_euclid(F64::new(4.0)), F64::new(1.0));
    /// ```
    #[inline]
    pub fn div_euclid(self, rhs: Self) -> Self {
        Self::new(self.value.div_euclid(rhs.value))
    }

    /// Euclidean remainder: non-negative and less than `|rhs|` for finite
    /// results, unlike `%`, which keeps the dividend's sign.
    #[inline]
    pub fn rem_euclid(self, rhs: Self) -> Self {
        Self::new(self.value.rem_euclid(rhs.value))
    }
}

#[cfg(test)]
mod tests {
    use crate::float::{F32, F64};

    fn close(a: F64, b: f64) -> bool {
        (a.get() - b).abs() < 1e-12
    }

    #[test]
    fn test_rounding_family() {
        assert_eq!(F64::new(2.7).floor(), F64::new(2.0));
        assert_eq!(F64::new(-2.1).floor(), F64::new(-3.0));
        assert_eq!(F64::new(2.1).ceil(), F64::new(3.0));
        assert_eq!(F64::new(2.5).round(), F64::new(3.0));
        assert_eq!(F64::new(-2.5).round(), F64::new(-3.0));
        assert_eq!(F64::new(-2.7).trunc(), F64::new(-2.0));
        assert!(close(F64::new(2.75).fract(), 0.75));
    }

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(F64::new(9.0).sqrt(), F64::new(3.0));
        assert!(F64::new(-4.0).sqrt().is_nan());
        assert_eq!(F32::new(-0.0).sqrt(), F32::new(-0.0));
    }

    #[test]
    fn test_inverse_trig_domains() {
        assert!(F64::new(1.5).asin().is_nan());
        assert!(F64::new(-1.5).acos().is_nan());
        assert!(close(F64::new(1.0).asin(), std::f64::consts::FRAC_PI_2));
        assert!(close(F64::new(1.0).atan2(F64::new(1.0)), std::f64::consts::FRAC_PI_4));
    }

    #[test]
    fn test_exp_ln_round_trip() {
        assert!(close(F64::new(2.0).exp().ln(), 2.0));
        assert!(close(F64::new(8.0).log2(), 3.0));
        assert!(close(F64::new(1000.0).log10(), 3.0));
        assert!(close(F64::new(27.0).log(F64::new(3.0)), 3.0));
        assert_eq!(F64::new(0.0).ln(), F64::NEG_INFINITY);
        assert!(F64::new(-1.0).ln().is_nan());
    }

    #[test]
    fn test_pow_family() {
        assert_eq!(F64::new(2.0).powi(10), F64::new(1024.0));
        assert_eq!(F64::new(2.0).powi(-1), F64::new(0.5));
        assert!(close(F64::new(2.0).powf(F64::new(0.5)), std::f64::consts::SQRT_2));
    }

    #[test]
    fn test_mul_add_and_hypot() {
        assert_eq!(
            F64::new(2.0).mul_add(F64::new(3.0), F64::new(1.0)),
            F64::new(7.0)
        );
        assert_eq!(F64::new(3.0).hypot(F64::new(4.0)), F64::new(5.0));
    }

    #[test]
    fn test_sign_helpers() {
        assert_eq!(F64::new(-3.5).abs(), F64::new(3.5));
        assert_eq!(F64::new(-3.5).signum(), F64::new(-1.0));
        assert_eq!(F64::new(3.5).copysign(F64::new(-1.0)), F64::new(-3.5));
        assert!(F64::NAN.signum().is_nan());
    }

    #[test]
    fn test_euclidean_identity() {
        for a in [-7.5f64, -1.0, 0.5, 7.25] {
            for b in [-4.0f64, 2.5, 4.0] {
                let (a, b) = (F64::new(a), F64::new(b));
                let q = a.div_euclid(b);
                let r = a.rem_euclid(b);
                assert!((q * b + r - a).abs().get() < 1e-12);
                assert!(r.get() >= 0.0);
                assert!(r.get() < b.abs().get());
            }
        }
    }

    #[test]
    fn test_hyperbolic_round_trip() {
        assert!(close(F64::new(0.5).sinh().asinh(), 0.5));
        assert!(close(F64::new(1.5).cosh().acosh(), 1.5));
        assert!(close(F64::new(0.5).tanh().atanh(), 0.5));
        assert!(F64::new(0.5).acosh().is_nan());
    }

    #[test]
    fn test_angle_conversions() {
        assert!(close(F64::PI.to_degrees(), 180.0));
        assert!(close(F64::new(180.0).to_radians(), std::f64::consts::PI));
    }
}
