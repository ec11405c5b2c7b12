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

//! Operator trait implementations for `Int<T>`.
//!
//! The standard operators are the panicking policy: any overflow, zero
//! divisor, or out-of-range shift amount aborts, in release builds as much
//! as in debug builds. Compound assignment operators reuse the same
//! semantics.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::int::Int;
use crate::primitive::int::{IntPrimitive, SignedPrimitive};

macro_rules! int_arith_op_impl {
    ($op_trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $msg:literal) => {
        impl<T> $op_trait for Int<T>
        where
            T: IntPrimitive,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                match self.$checked(rhs) {
                    Some(value) => value,
                    None => panic!($msg),
                }
            }
        }

        impl<T> $assign_trait for Int<T>
        where
            T: IntPrimitive,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op_trait::$method(*self, rhs);
            }
        }
    };
}

int_arith_op_impl!(Add, add, AddAssign, add_assign, checked_add, "attempt to add with overflow");
int_arith_op_impl!(
    Sub,
    sub,
    SubAssign,
    sub_assign,
    checked_sub,
    "attempt to subtract with overflow"
);
int_arith_op_impl!(
    Mul,
    mul,
    MulAssign,
    mul_assign,
    checked_mul,
    "attempt to multiply with overflow"
);

impl<T> Div for Int<T>
where
    T: IntPrimitive,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a zero divisor and on `MIN / -1`.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.value == T::ZERO {
            panic!("attempt to divide by zero");
        }
        match self.checked_div(rhs) {
            Some(value) => value,
            None => panic!("attempt to divide with overflow"),
        }
    }
}

impl<T> DivAssign for Int<T>
where
    T: IntPrimitive,
{
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T> Rem for Int<T>
where
    T: IntPrimitive,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a zero divisor and on `MIN % -1`.
    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        if rhs.value == T::ZERO {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        match self.checked_rem(rhs) {
            Some(value) => value,
            None => panic!("attempt to calculate the remainder with overflow"),
        }
    }
}

impl<T> RemAssign for Int<T>
where
    T: IntPrimitive,
{
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<T> Neg for Int<T>
where
    T: SignedPrimitive,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics for `MIN`, whose positive counterpart is unrepresentable.
    #[inline]
    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Some(value) => value,
            None => panic!("attempt to negate with overflow"),
        }
    }
}

impl<T> Not for Int<T>
where
    T: IntPrimitive,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self::new(!self.value)
    }
}

macro_rules! int_bit_op_impl {
    ($op_trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T> $op_trait for Int<T>
        where
            T: IntPrimitive,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.value $op rhs.value)
            }
        }

        impl<T> $assign_trait for Int<T>
        where
            T: IntPrimitive,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op_trait::$method(*self, rhs);
            }
        }
    };
}

int_bit_op_impl!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
int_bit_op_impl!(BitOr, bitor, BitOrAssign, bitor_assign, |);
int_bit_op_impl!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<T> Shl<u32> for Int<T>
where
    T: IntPrimitive,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is at or above the bit width.
    #[inline]
    fn shl(self, rhs: u32) -> Self::Output {
        match self.checked_shl(rhs) {
            Some(value) => value,
            None => panic!("attempt to shift left with overflow"),
        }
    }
}

impl<T> ShlAssign<u32> for Int<T>
where
    T: IntPrimitive,
{
    #[inline]
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl<T> Shr<u32> for Int<T>
where
    T: IntPrimitive,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics when `rhs` is at or above the bit width.
    #[inline]
    fn shr(self, rhs: u32) -> Self::Output {
        match self.checked_shr(rhs) {
            Some(value) => value,
            None => panic!("attempt to shift right with overflow"),
        }
    }
}

impl<T> ShrAssign<u32> for Int<T>
where
    T: IntPrimitive,
{
    #[inline]
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::int::{I32, I8, U32, U8};

    #[test]
    fn test_operators_in_range() {
        assert_eq!(I32::new(2) + I32::new(3), I32::new(5));
        assert_eq!(I32::new(2) - I32::new(3), I32::new(-1));
        assert_eq!(I32::new(2) * I32::new(3), I32::new(6));
        assert_eq!(I32::new(7) / I32::new(2), I32::new(3));
        assert_eq!(I32::new(7) % I32::new(2), I32::new(1));
        assert_eq!(I32::new(-7) % I32::new(2), I32::new(-1));
    }

    #[test]
    #[should_panic(expected = "attempt to add with overflow")]
    fn test_add_overflow_panics() {
        let _ = I8::new(120) + I8::new(10);
    }

    #[test]
    #[should_panic(expected = "attempt to subtract with overflow")]
    fn test_sub_overflow_panics() {
        let _ = U8::ZERO - U8::new(1);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = I32::new(1) / I32::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to divide with overflow")]
    fn test_div_min_by_minus_one_panics() {
        let _ = I8::MIN / I8::new(-1);
    }

    #[test]
    #[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
    fn test_rem_by_zero_panics() {
        let _ = I32::new(1) % I32::ZERO;
    }

    #[test]
    #[should_panic(expected = "attempt to negate with overflow")]
    fn test_neg_min_panics() {
        let _ = -I8::MIN;
    }

    #[test]
    fn test_assign_operators() {
        let mut v = I32::new(10);
        v += I32::new(5);
        v -= I32::new(3);
        v *= I32::new(2);
        v /= I32::new(4);
        v %= I32::new(4);
        assert_eq!(v, I32::new(2));
    }

    #[test]
    fn test_bit_operators() {
        assert_eq!(U8::new(0b1100) & U8::new(0b1010), U8::new(0b1000));
        assert_eq!(U8::new(0b1100) | U8::new(0b1010), U8::new(0b1110));
        assert_eq!(U8::new(0b1100) ^ U8::new(0b1010), U8::new(0b0110));
        assert_eq!(!U8::ZERO, U8::MAX);
        assert_eq!(!I8::ZERO, I8::new(-1));

        let mut v = U8::new(0b1100);
        v &= U8::new(0b1010);
        v |= U8::new(0b0001);
        v ^= U8::new(0b1111);
        assert_eq!(v, U8::new(0b0110));
    }

    #[test]
    fn test_shift_operators() {
        assert_eq!(U32::new(1) << 4, U32::new(16));
        assert_eq!(U32::new(16) >> 4, U32::new(1));
        assert_eq!(I32::new(-8) >> 1, I32::new(-4));

        let mut v = U32::new(1);
        v <<= 3;
        v >>= 1;
        assert_eq!(v, U32::new(4));
    }

    #[test]
    #[should_panic(expected = "attempt to shift left with overflow")]
    fn test_shift_at_bit_width_panics() {
        let _ = U32::new(1) << 32;
    }
}
