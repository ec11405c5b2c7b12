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

//! # Integer Wrapper Family
//!
//! `Int<T>` wraps a machine integer primitive and replaces its silently
//! wrapping release-mode arithmetic with explicit overflow policies. The
//! default operators panic on overflow in every build profile; the
//! `checked_*`, `overflowing_*`, `saturating_*`, `wrapping_*`, and
//! `unchecked_*` method families give callers the recovery semantics they
//! choose per call site.
//!
//! The whole method surface is implemented once against the `IntPrimitive`
//! trait bound; `I8` through `Usize` are thin aliases over the ten supported
//! widths. Signed-only operations (`abs`, `signum`, mixed unsigned
//! arithmetic) live in impl blocks bounded on `SignedPrimitive`, unsigned
//! ones (power-of-two helpers) on `UnsignedPrimitive`.
//!
//! ## Example
//!
//! ```rust
//! use ballast_num::{I32, U8};
//!
//! let total = I32::new(2).pow(10);
//! assert_eq!(total, I32::new(1024));
//!
//! // Conversions between family members panic out of range and elide
//! // statically impossible checks.
//! let byte = U8::from_int(I32::new(200));
//! assert_eq!(byte.get(), 200u8);
//! assert_eq!(U8::checked_from_int(I32::new(300)), None);
//! ```

use std::fmt;

use crate::primitive::int::IntPrimitive;

mod arith;
mod bits;
mod convert;
mod ops;

/// A fixed-width integer with explicit overflow policies.
///
/// A transparent wrapper over a machine primitive: always a valid bit
/// pattern for its width, `Copy`, and totally ordered. Arithmetic through
/// the standard operators panics on overflow instead of wrapping; the
/// policy method families select other behaviors.
///
/// # Examples
///
/// ```rust
/// use ballast_num::I8;
///
/// let a = I8::new(120);
/// assert_eq!(a.checked_add(I8::new(10)), None);
/// assert_eq!(a.wrapping_add(I8::new(10)), I8::new(-126));
/// assert_eq!(a.saturating_add(I8::new(10)), I8::MAX);
/// assert_eq!(a.overflowing_add(I8::new(10)), (I8::new(-126), true));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Int<T>
where
    T: IntPrimitive,
{
    value: T,
}

/// An 8-bit signed integer with explicit overflow policies.
pub type I8 = Int<i8>;
/// A 16-bit signed integer with explicit overflow policies.
pub type I16 = Int<i16>;
/// A 32-bit signed integer with explicit overflow policies.
pub type I32 = Int<i32>;
/// A 64-bit signed integer with explicit overflow policies.
pub type I64 = Int<i64>;
/// A pointer-sized signed integer with explicit overflow policies.
pub type Isize = Int<isize>;
/// An 8-bit unsigned integer with explicit overflow policies.
pub type U8 = Int<u8>;
/// A 16-bit unsigned integer with explicit overflow policies.
pub type U16 = Int<u16>;
/// A 32-bit unsigned integer with explicit overflow policies.
pub type U32 = Int<u32>;
/// A 64-bit unsigned integer with explicit overflow policies.
pub type U64 = Int<u64>;
/// A pointer-sized unsigned integer with explicit overflow policies.
pub type Usize = Int<usize>;

impl<T> Int<T>
where
    T: IntPrimitive,
{
    /// The smallest value representable by this type.
    pub const MIN: Self = Self { value: T::MIN };
    /// The largest value representable by this type.
    pub const MAX: Self = Self { value: T::MAX };
    /// The width of this type in bits.
    pub const BITS: u32 = T::BITS;
    /// The value `0`.
    pub const ZERO: Self = Self { value: T::ZERO };
    /// The value `1`.
    pub const ONE: Self = Self { value: T::ONE };

    /// Wraps a primitive value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::I32;
    ///
    /// let v = I32::new(42);
    /// assert_eq!(v.get(), 42);
    /// ```
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

impl<T> From<T> for Int<T>
where
    T: IntPrimitive,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! int_into_primitive_impl {
    ($t:ty) => {
        impl From<Int<$t>> for $t {
            #[inline(always)]
            fn from(v: Int<$t>) -> $t {
                v.get()
            }
        }
    };
}

int_into_primitive_impl!(i8);
int_into_primitive_impl!(i16);
int_into_primitive_impl!(i32);
int_into_primitive_impl!(i64);
int_into_primitive_impl!(isize);
int_into_primitive_impl!(u8);
int_into_primitive_impl!(u16);
int_into_primitive_impl!(u32);
int_into_primitive_impl!(u64);
int_into_primitive_impl!(usize);

macro_rules! int_fmt_impl {
    ($fmt_trait:ident) => {
        impl<T> fmt::$fmt_trait for Int<T>
        where
            T: IntPrimitive,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$fmt_trait::fmt(&self.value, f)
            }
        }
    };
}

int_fmt_impl!(Debug);
int_fmt_impl!(Display);
int_fmt_impl!(Binary);
int_fmt_impl!(Octal);
int_fmt_impl!(LowerHex);
int_fmt_impl!(UpperHex);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(I8::MIN.get(), i8::MIN);
        assert_eq!(I8::MAX.get(), i8::MAX);
        assert_eq!(U32::BITS, 32);
        assert_eq!(Isize::BITS, usize::BITS);
        assert_eq!(U64::ZERO.get(), 0);
        assert_eq!(I16::ONE.get(), 1);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(I32::default(), I32::ZERO);
        assert_eq!(Usize::default(), Usize::ZERO);
    }

    #[test]
    fn test_total_order() {
        let mut v = [I32::new(3), I32::new(-1), I32::new(2)];
        v.sort();
        assert_eq!(v, [I32::new(-1), I32::new(2), I32::new(3)]);
        assert!(I8::MIN < I8::MAX);
    }

    #[test]
    fn test_primitive_conversions() {
        let v: I32 = 7.into();
        assert_eq!(v, I32::new(7));
        let raw: i32 = v.into();
        assert_eq!(raw, 7);
    }

    #[test]
    fn test_formatting_delegates() {
        assert_eq!(format!("{}", I32::new(-42)), "-42");
        assert_eq!(format!("{:?}", U8::new(42)), "42");
        assert_eq!(format!("{:#06b}", U8::new(5)), "0b0101");
        assert_eq!(format!("{:x}", U32::new(0xBEEF)), "beef");
        assert_eq!(format!("{:X}", U32::new(0xBEEF)), "BEEF");
        assert_eq!(format!("{:o}", U8::new(8)), "10");
    }
}
