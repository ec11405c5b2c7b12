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

//! Operator trait implementations for `Float<T>`.
//!
//! All operators map directly to the hardware float operations and follow
//! IEEE-754: division by zero yields an infinity, invalid operations yield
//! NaN, nothing panics. The remainder keeps the sign of the dividend,
//! computed as `x - trunc(x / y) * y`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::float::Float;
use crate::primitive::float::FloatPrimitive;

macro_rules! float_arith_op_impl {
    ($op_trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T> $op_trait for Float<T>
        where
            T: FloatPrimitive,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.value $op rhs.value)
            }
        }

        impl<T> $assign_trait for Float<T>
        where
            T: FloatPrimitive,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op_trait::$method(*self, rhs);
            }
        }
    };
}

float_arith_op_impl!(Add, add, AddAssign, add_assign, +);
float_arith_op_impl!(Sub, sub, SubAssign, sub_assign, -);
float_arith_op_impl!(Mul, mul, MulAssign, mul_assign, *);
float_arith_op_impl!(Div, div, DivAssign, div_assign, /);
float_arith_op_impl!(Rem, rem, RemAssign, rem_assign, %);

impl<T> Neg for Float<T>
where
    T: FloatPrimitive,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}
