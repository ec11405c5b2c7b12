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

//! Overflow-policy arithmetic method families for `Int<T>`.
//!
//! Each binary operation exists in up to six forms sharing one contract:
//! the operator panics, `checked_*` returns `Option`, `overflowing_*`
//! returns the wrapped value with a flag, `saturating_*` clamps,
//! `wrapping_*` truncates, and `unchecked_*` asserts the precondition to
//! the optimizer. Division and remainder treat a zero divisor and
//! `MIN / -1` as their failure cases; negation and absolute value share
//! the single `MIN` edge case.

use crate::int::Int;
use crate::primitive::int::{IntPrimitive, SignedPrimitive, UnsignedPrimitive};

impl<T> Int<T>
where
    T: IntPrimitive,
{
    /// Checked addition. Returns `None` if the sum would overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I8;
    ///
    /// assert_eq!(I8::new(100).checked_add(I8::new(20)), Some(I8::new(120)));
    /// assert_eq!(I8::new(120).checked_add(I8::new(10)), None);
    /// ```
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.value.checked_add(rhs.value).map(Self::new)
    }

    /// Checked subtraction. Returns `None` if the difference would overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.value.checked_sub(rhs.value).map(Self::new)
    }

    /// Checked multiplication. Returns `None` if the product would overflow.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.value.checked_mul(rhs.value).map(Self::new)
    }

    /// Checked division. Returns `None` if `rhs` is zero or the division
    /// overflows (`MIN / -1` on signed types).
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.value.checked_div(rhs.value).map(Self::new)
    }

    /// Checked remainder. Returns `None` if `rhs` is zero or the operation
    /// overflows (`MIN % -1` on signed types).
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.value.checked_rem(rhs.value).map(Self::new)
    }

    /// Checked negation. Returns `None` when the result is unrepresentable:
    /// `MIN` for signed types, any nonzero value for unsigned types.
    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        self.value.checked_neg().map(Self::new)
    }

    /// Addition with an overflow flag. The value is the wrapped result even
    /// when the flag is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::U8;
    ///
    /// assert_eq!(U8::new(250).overflowing_add(U8::new(10)), (U8::new(4), true));
    /// assert_eq!(U8::new(250).overflowing_add(U8::new(5)), (U8::new(255), false));
    /// ```
    #[inline]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_add(rhs.value);
        (Self::new(value), overflow)
    }

    /// Subtraction with an overflow flag.
    #[inline]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_sub(rhs.value);
        (Self::new(value), overflow)
    }

    /// Multiplication with an overflow flag.
    #[inline]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_mul(rhs.value);
        (Self::new(value), overflow)
    }

    /// Division with an overflow flag; the flag is set only for `MIN / -1`,
    /// which wraps to `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        let (value, overflow) = self.value.overflowing_div(rhs.value);
        (Self::new(value), overflow)
    }

    /// Remainder with an overflow flag; the flag is set only for `MIN % -1`,
    /// which yields `0`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        if rhs.value == T::ZERO {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        let (value, overflow) = self.value.overflowing_rem(rhs.value);
        (Self::new(value), overflow)
    }

    /// Negation with an overflow flag.
    #[inline]
    pub fn overflowing_neg(self) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_neg();
        (Self::new(value), overflow)
    }

    /// Saturating addition, clamping to `MIN`/`MAX` in the direction of the
    /// overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I8;
    ///
    /// assert_eq!(I8::new(120).saturating_add(I8::new(10)), I8::MAX);
    /// assert_eq!(I8::new(-120).saturating_add(I8::new(-10)), I8::MIN);
    /// ```
    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::new(self.value.saturating_add(rhs.value))
    }

    /// Saturating subtraction.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::new(self.value.saturating_sub(rhs.value))
    }

    /// Saturating multiplication.
    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        Self::new(self.value.saturating_mul(rhs.value))
    }

    /// Saturating division. Only `MIN / -1` saturates, to `MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn saturating_div(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        Self::new(self.value.saturating_div(rhs.value))
    }

    /// Wrapping (modular) addition: the sum modulo `2^BITS`, reinterpreted
    /// as two's complement.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::new(self.value.wrapping_add(rhs.value))
    }

    /// Wrapping (modular) subtraction.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::new(self.value.wrapping_sub(rhs.value))
    }

    /// Wrapping (modular) multiplication.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::new(self.value.wrapping_mul(rhs.value))
    }

    /// Wrapping division; `MIN / -1` wraps back to `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        Self::new(self.value.wrapping_div(rhs.value))
    }

    /// Wrapping remainder; `MIN % -1` yields `0`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        Self::new(self.value.wrapping_rem(rhs.value))
    }

    /// Wrapping negation; `MIN` stays `MIN` on signed types, and unsigned
    /// values become their two's-complement complement.
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self::new(self.value.wrapping_neg())
    }

    /// Unchecked addition.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self + rhs` does not overflow; otherwise
    /// the result is undefined behavior.
    #[inline]
    pub unsafe fn unchecked_add(self, rhs: Self) -> Self {
        Self::new(self.value.unchecked_add(rhs.value))
    }

    /// Unchecked subtraction.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self - rhs` does not overflow; otherwise
    /// the result is undefined behavior.
    #[inline]
    pub unsafe fn unchecked_sub(self, rhs: Self) -> Self {
        Self::new(self.value.unchecked_sub(rhs.value))
    }

    /// Unchecked multiplication.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self * rhs` does not overflow; otherwise
    /// the result is undefined behavior.
    #[inline]
    pub unsafe fn unchecked_mul(self, rhs: Self) -> Self {
        Self::new(self.value.unchecked_mul(rhs.value))
    }

    /// Euclidean division: computes the `q` in `self = q * rhs + r` with
    /// `0 <= r < |rhs|`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or the division overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I32;
    ///
    /// assert_eq!(I32::new(-7).div_euclid(I32::new(4)), I32::new(-2));
    /// assert_eq!(I32::new(7).div_euclid(I32::new(4)), I32::new(1));
    /// ```
    #[inline]
    pub fn div_euclid(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        match self.value.checked_div_euclid(rhs.value) {
            Some(value) => Self::new(value),
            None => panic!("attempt to divide with overflow"),
        }
    }

    /// Euclidean remainder: always in `[0, |rhs|)` when it does not
    /// overflow.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or the operation overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I32;
    ///
    /// assert_eq!(I32::new(-7).rem_euclid(I32::new(4)), I32::new(1));
    /// assert_eq!(I32::new(-7).rem_euclid(I32::new(-4)), I32::new(1));
    /// ```
    #[inline]
    pub fn rem_euclid(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        match self.value.checked_rem_euclid(rhs.value) {
            Some(value) => Self::new(value),
            None => panic!("attempt to calculate the remainder with overflow"),
        }
    }

    /// Checked Euclidean division.
    #[inline]
    pub fn checked_div_euclid(self, rhs: Self) -> Option<Self> {
        self.value.checked_div_euclid(rhs.value).map(Self::new)
    }

    /// Checked Euclidean remainder.
    #[inline]
    pub fn checked_rem_euclid(self, rhs: Self) -> Option<Self> {
        self.value.checked_rem_euclid(rhs.value).map(Self::new)
    }

    /// Euclidean division with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn overflowing_div_euclid(self, rhs: Self) -> (Self, bool) {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        let (value, overflow) = self.value.overflowing_div_euclid(rhs.value);
        (Self::new(value), overflow)
    }

    /// Euclidean remainder with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn overflowing_rem_euclid(self, rhs: Self) -> (Self, bool) {
        if rhs.value == T::ZERO {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        let (value, overflow) = self.value.overflowing_rem_euclid(rhs.value);
        (Self::new(value), overflow)
    }

    /// Wrapping Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn wrapping_div_euclid(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        Self::new(self.value.wrapping_div_euclid(rhs.value))
    }

    /// Wrapping Euclidean remainder.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn wrapping_rem_euclid(self, rhs: Self) -> Self {
        if rhs.value == T::ZERO {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        Self::new(self.value.wrapping_rem_euclid(rhs.value))
    }

    /// Exponentiation by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if an intermediate multiplication overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I32;
    ///
    /// assert_eq!(I32::new(3).pow(4), I32::new(81));
    /// ```
    #[inline]
    pub fn pow(self, exp: u32) -> Self {
        match self.value.checked_pow(exp) {
            Some(value) => Self::new(value),
            None => panic!("attempt to multiply with overflow"),
        }
    }

    /// Checked exponentiation. `None` if an intermediate multiplication
    /// overflows.
    #[inline]
    pub fn checked_pow(self, exp: u32) -> Option<Self> {
        self.value.checked_pow(exp).map(Self::new)
    }

    /// Exponentiation with an overflow flag.
    #[inline]
    pub fn overflowing_pow(self, exp: u32) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_pow(exp);
        (Self::new(value), overflow)
    }

    /// Wrapping exponentiation.
    #[inline]
    pub fn wrapping_pow(self, exp: u32) -> Self {
        Self::new(self.value.wrapping_pow(exp))
    }

    /// Saturating exponentiation.
    #[inline]
    pub fn saturating_pow(self, exp: u32) -> Self {
        Self::new(self.value.saturating_pow(exp))
    }

    /// Base-2 logarithm, rounded down.
    ///
    /// # Panics
    ///
    /// Panics when the value is zero or negative.
    #[inline]
    pub fn log2(self) -> u32 {
        match self.checked_log2() {
            Some(log) => log,
            None => panic!("argument of integer logarithm must be positive"),
        }
    }

    /// Base-2 logarithm, rounded down. `None` when the value is zero or
    /// negative.
    #[inline]
    pub fn checked_log2(self) -> Option<u32> {
        self.value.checked_ilog2()
    }

    /// Base-10 logarithm, rounded down.
    ///
    /// # Panics
    ///
    /// Panics when the value is zero or negative.
    #[inline]
    pub fn log10(self) -> u32 {
        match self.checked_log10() {
            Some(log) => log,
            None => panic!("argument of integer logarithm must be positive"),
        }
    }

    /// Base-10 logarithm, rounded down. `None` when the value is zero or
    /// negative.
    #[inline]
    pub fn checked_log10(self) -> Option<u32> {
        self.value.checked_ilog10()
    }

    /// Logarithm with respect to an arbitrary base, rounded down. `None`
    /// when the value is zero or negative, or when the base is less than 2.
    ///
    /// Computed by repeated division, so rounding can differ from
    /// `checked_log2`/`checked_log10` near exact powers; those are also the
    /// faster paths for bases 2 and 10.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::U32;
    ///
    /// assert_eq!(U32::new(27).checked_log(U32::new(3)), Some(3));
    /// assert_eq!(U32::new(0).checked_log(U32::new(3)), None);
    /// assert_eq!(U32::new(27).checked_log(U32::new(1)), None);
    /// ```
    pub fn checked_log(self, base: Self) -> Option<u32> {
        if self.value <= T::ZERO || base.value <= T::ONE {
            return None;
        }
        let mut log = 0u32;
        let mut remaining = self.value;
        while remaining >= base.value {
            remaining = remaining / base.value;
            log += 1;
        }
        Some(log)
    }

    /// Logarithm with respect to an arbitrary base, rounded down.
    ///
    /// # Panics
    ///
    /// Panics when the value is zero or negative, or when the base is less
    /// than 2.
    #[inline]
    pub fn log(self, base: Self) -> u32 {
        if base.value <= T::ONE {
            panic!("base of integer logarithm must be at least 2");
        }
        match self.checked_log(base) {
            Some(log) => log,
            None => panic!("argument of integer logarithm must be positive"),
        }
    }
}

impl<T> Int<T>
where
    T: SignedPrimitive,
{
    /// Absolute value.
    ///
    /// # Panics
    ///
    /// Panics for `MIN`, whose positive counterpart is unrepresentable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I8;
    ///
    /// assert_eq!(I8::new(-5).abs(), I8::new(5));
    /// assert_eq!(I8::new(5).abs(), I8::new(5));
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        match self.value.checked_abs() {
            Some(value) => Self::new(value),
            None => panic!("attempt to negate with overflow"),
        }
    }

    /// Checked absolute value. `None` for `MIN`.
    #[inline]
    pub fn checked_abs(self) -> Option<Self> {
        self.value.checked_abs().map(Self::new)
    }

    /// Absolute value with an overflow flag; `MIN` yields `(MIN, true)`.
    #[inline]
    pub fn overflowing_abs(self) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_abs();
        (Self::new(value), overflow)
    }

    /// Wrapping absolute value; `MIN` stays `MIN`.
    #[inline]
    pub fn wrapping_abs(self) -> Self {
        Self::new(self.value.wrapping_abs())
    }

    /// Saturating absolute value; `MIN` clamps to `MAX`.
    #[inline]
    pub fn saturating_abs(self) -> Self {
        Self::new(self.value.saturating_abs())
    }

    /// Saturating negation; `MIN` clamps to `MAX`.
    #[inline]
    pub fn saturating_neg(self) -> Self {
        Self::new(self.value.saturating_neg())
    }

    /// The absolute value as the matching unsigned type. Unlike `abs` this
    /// cannot overflow: `MIN` maps to `MAX + 1` of the unsigned width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::{I8, U8};
    ///
    /// assert_eq!(I8::MIN.unsigned_abs(), U8::new(128));
    /// ```
    #[inline]
    pub fn unsigned_abs(self) -> Int<T::Unsigned> {
        Int::new(self.value.unsigned_abs())
    }

    /// The sign of the value: `-1`, `0`, or `1`.
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.value.signum())
    }

    /// Whether the value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.value.is_negative()
    }

    /// Whether the value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.value.is_positive()
    }

    /// Checked addition of an unsigned value of the same width.
    #[inline]
    pub fn checked_add_unsigned(self, rhs: Int<T::Unsigned>) -> Option<Self> {
        self.value.checked_add_unsigned(rhs.get()).map(Self::new)
    }

    /// Addition of an unsigned value, with an overflow flag.
    #[inline]
    pub fn overflowing_add_unsigned(self, rhs: Int<T::Unsigned>) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_add_unsigned(rhs.get());
        (Self::new(value), overflow)
    }

    /// Wrapping addition of an unsigned value.
    #[inline]
    pub fn wrapping_add_unsigned(self, rhs: Int<T::Unsigned>) -> Self {
        Self::new(self.value.wrapping_add_unsigned(rhs.get()))
    }

    /// Saturating addition of an unsigned value.
    #[inline]
    pub fn saturating_add_unsigned(self, rhs: Int<T::Unsigned>) -> Self {
        Self::new(self.value.saturating_add_unsigned(rhs.get()))
    }

    /// Checked subtraction of an unsigned value of the same width.
    #[inline]
    pub fn checked_sub_unsigned(self, rhs: Int<T::Unsigned>) -> Option<Self> {
        self.value.checked_sub_unsigned(rhs.get()).map(Self::new)
    }

    /// Subtraction of an unsigned value, with an overflow flag.
    #[inline]
    pub fn overflowing_sub_unsigned(self, rhs: Int<T::Unsigned>) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_sub_unsigned(rhs.get());
        (Self::new(value), overflow)
    }

    /// Wrapping subtraction of an unsigned value.
    #[inline]
    pub fn wrapping_sub_unsigned(self, rhs: Int<T::Unsigned>) -> Self {
        Self::new(self.value.wrapping_sub_unsigned(rhs.get()))
    }

    /// Saturating subtraction of an unsigned value.
    #[inline]
    pub fn saturating_sub_unsigned(self, rhs: Int<T::Unsigned>) -> Self {
        Self::new(self.value.saturating_sub_unsigned(rhs.get()))
    }
}

impl<T> Int<T>
where
    T: UnsignedPrimitive,
{
    /// Whether exactly one bit is set.
    #[inline]
    pub fn is_power_of_two(self) -> bool {
        self.value.is_power_of_two()
    }

    /// The smallest power of two greater than or equal to the value.
    ///
    /// # Panics
    ///
    /// Panics when the result would overflow the type.
    #[inline]
    pub fn next_power_of_two(self) -> Self {
        match self.value.checked_next_power_of_two() {
            Some(value) => Self::new(value),
            None => panic!("attempt to add with overflow"),
        }
    }

    /// The smallest power of two greater than or equal to the value, or
    /// `None` if it would overflow.
    #[inline]
    pub fn checked_next_power_of_two(self) -> Option<Self> {
        self.value.checked_next_power_of_two().map(Self::new)
    }

    /// Checked addition of a signed value of the same width.
    #[inline]
    pub fn checked_add_signed(self, rhs: Int<T::Signed>) -> Option<Self> {
        self.value.checked_add_signed(rhs.get()).map(Self::new)
    }

    /// Addition of a signed value, with an overflow flag.
    #[inline]
    pub fn overflowing_add_signed(self, rhs: Int<T::Signed>) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_add_signed(rhs.get());
        (Self::new(value), overflow)
    }

    /// Wrapping addition of a signed value.
    #[inline]
    pub fn wrapping_add_signed(self, rhs: Int<T::Signed>) -> Self {
        Self::new(self.value.wrapping_add_signed(rhs.get()))
    }

    /// Saturating addition of a signed value.
    #[inline]
    pub fn saturating_add_signed(self, rhs: Int<T::Signed>) -> Self {
        Self::new(self.value.saturating_add_signed(rhs.get()))
    }
}

#[cfg(test)]
mod tests {
    use crate::int::{I32, I8, U32, U8};

    #[test]
    fn test_checked_add_edges() {
        assert_eq!(I8::new(120).checked_add(I8::new(10)), None);
        assert_eq!(I8::new(100).checked_add(I8::new(20)), Some(I8::new(120)));
        assert_eq!(U8::new(255).checked_add(U8::new(1)), None);
    }

    #[test]
    fn test_policy_agreement() {
        // checked is None exactly when overflowing flags.
        let pairs = [(120i8, 10i8), (100, 20), (-128, -1), (0, 0), (-100, -100)];
        for (a, b) in pairs {
            let (a, b) = (I8::new(a), I8::new(b));
            assert_eq!(a.checked_add(b).is_none(), a.overflowing_add(b).1);
            assert_eq!(a.checked_sub(b).is_none(), a.overflowing_sub(b).1);
            assert_eq!(a.checked_mul(b).is_none(), a.overflowing_mul(b).1);
        }
    }

    #[test]
    fn test_saturating_directions() {
        assert_eq!(I8::new(120).saturating_add(I8::new(10)), I8::MAX);
        assert_eq!(I8::new(-120).saturating_add(I8::new(-10)), I8::MIN);
        assert_eq!(U8::new(1).saturating_sub(U8::new(2)), U8::ZERO);
        assert_eq!(I8::new(-30).saturating_mul(I8::new(10)), I8::MIN);
    }

    #[test]
    fn test_neg_family_at_min() {
        assert_eq!(I8::MIN.checked_neg(), None);
        assert_eq!(I8::MIN.overflowing_neg(), (I8::MIN, true));
        assert_eq!(I8::MIN.wrapping_neg(), I8::MIN);
        assert_eq!(I8::MIN.saturating_neg(), I8::MAX);
    }

    #[test]
    fn test_abs_family_at_min() {
        assert_eq!(I8::MIN.checked_abs(), None);
        assert_eq!(I8::MIN.overflowing_abs(), (I8::MIN, true));
        assert_eq!(I8::MIN.wrapping_abs(), I8::MIN);
        assert_eq!(I8::MIN.saturating_abs(), I8::MAX);
        assert_eq!(I8::MIN.unsigned_abs(), U8::new(128));
    }

    #[test]
    #[should_panic(expected = "attempt to negate with overflow")]
    fn test_abs_min_panics() {
        let _ = I8::MIN.abs();
    }

    #[test]
    fn test_division_edge_cases() {
        assert_eq!(I8::MIN.checked_div(I8::new(-1)), None);
        assert_eq!(I8::MIN.wrapping_div(I8::new(-1)), I8::MIN);
        assert_eq!(I8::MIN.wrapping_rem(I8::new(-1)), I8::ZERO);
        assert_eq!(I8::MIN.saturating_div(I8::new(-1)), I8::MAX);
        assert_eq!(I8::MIN.overflowing_div(I8::new(-1)), (I8::MIN, true));
        assert_eq!(I8::new(10).checked_div(I8::ZERO), None);
        assert_eq!(I8::new(10).checked_rem(I8::ZERO), None);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_wrapping_div_by_zero_panics() {
        let _ = I32::new(1).wrapping_div(I32::ZERO);
    }

    #[test]
    fn test_euclidean_identity() {
        for a in [-7i32, -1, 0, 1, 7, 100, -100] {
            for b in [-4i32, -3, 3, 4] {
                let (a, b) = (I32::new(a), I32::new(b));
                let q = a.div_euclid(b);
                let r = a.rem_euclid(b);
                assert_eq!(q.wrapping_mul(b).wrapping_add(r), a);
                assert!(r >= I32::ZERO);
                assert!(r.get() < b.get().abs());
            }
        }
    }

    #[test]
    fn test_pow_family() {
        assert_eq!(I32::new(2).pow(10), I32::new(1024));
        assert_eq!(I8::new(2).checked_pow(7), None);
        assert_eq!(I8::new(2).wrapping_pow(7), I8::new(-128));
        assert_eq!(I8::new(2).saturating_pow(7), I8::MAX);
        assert_eq!(I8::new(2).overflowing_pow(7), (I8::new(-128), true));
        assert_eq!(U8::new(3).pow(0), U8::ONE);
    }

    #[test]
    fn test_log_by_repeated_division() {
        assert_eq!(U32::new(27).checked_log(U32::new(3)), Some(3));
        assert_eq!(U32::new(26).checked_log(U32::new(3)), Some(2));
        assert_eq!(U32::new(1).checked_log(U32::new(3)), Some(0));
        assert_eq!(U32::ZERO.checked_log(U32::new(3)), None);
        assert_eq!(U32::new(27).checked_log(U32::ONE), None);
        assert_eq!(I32::new(-5).checked_log(I32::new(2)), None);
        assert_eq!(U32::new(1000).log(U32::new(10)), 3);
    }

    #[test]
    fn test_log2_log10() {
        assert_eq!(U32::new(8).log2(), 3);
        assert_eq!(U32::new(9).log2(), 3);
        assert_eq!(U32::new(100).log10(), 2);
        assert_eq!(I32::new(-4).checked_log2(), None);
        assert_eq!(U32::ZERO.checked_log10(), None);
    }

    #[test]
    #[should_panic(expected = "argument of integer logarithm must be positive")]
    fn test_log2_zero_panics() {
        let _ = U32::ZERO.log2();
    }

    #[test]
    fn test_mixed_signedness_arithmetic() {
        assert_eq!(I8::new(100).checked_add_unsigned(U8::new(27)), Some(I8::MAX));
        assert_eq!(I8::new(100).checked_add_unsigned(U8::new(28)), None);
        assert_eq!(I8::new(-100).checked_sub_unsigned(U8::new(28)), Some(I8::MIN));
        assert_eq!(U8::new(1).checked_add_signed(I8::new(-2)), None);
        assert_eq!(U8::new(1).wrapping_add_signed(I8::new(-2)), U8::MAX);
        assert_eq!(U8::new(250).saturating_add_signed(I8::new(100)), U8::MAX);
    }

    #[test]
    fn test_power_of_two_family() {
        assert!(U32::new(64).is_power_of_two());
        assert!(!U32::new(63).is_power_of_two());
        assert_eq!(U8::new(100).next_power_of_two(), U8::new(128));
        assert_eq!(U8::new(200).checked_next_power_of_two(), None);
    }

    #[test]
    fn test_unchecked_in_range() {
        // SAFETY: no overflow in any of these.
        unsafe {
            assert_eq!(I32::new(2).unchecked_add(I32::new(3)), I32::new(5));
            assert_eq!(I32::new(2).unchecked_sub(I32::new(3)), I32::new(-1));
            assert_eq!(I32::new(2).unchecked_mul(I32::new(3)), I32::new(6));
        }
    }

    #[test]
    fn test_signum() {
        assert_eq!(I32::new(-5).signum(), I32::new(-1));
        assert_eq!(I32::ZERO.signum(), I32::ZERO);
        assert_eq!(I32::new(5).signum(), I32::ONE);
        assert!(I32::new(-5).is_negative());
        assert!(!I32::ZERO.is_positive());
    }
}
