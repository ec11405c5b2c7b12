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

//! Cross-width conversion between integer family members.
//!
//! The bounds of every supported width fit in `i128`, so a conversion
//! compares the widened `MIN_WIDE`/`MAX_WIDE` constants of source and
//! destination. Those comparisons are between constants of the
//! monomorphized pair, so each instantiation keeps only the range checks
//! that can actually fail: widening conversions compile down to a plain
//! cast, narrowing ones to one or two compares.

use crate::int::Int;
use crate::primitive::int::IntPrimitive;

impl<T> Int<T>
where
    T: IntPrimitive,
{
    /// Converts from another integer family member, if the value fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::{I16, I32, U8};
    ///
    /// // A u8 always fits an i32: no runtime check survives.
    /// assert_eq!(I32::checked_from_int(U8::new(200)), Some(I32::new(200)));
    ///
    /// // Narrowing checks both bounds.
    /// assert_eq!(U8::checked_from_int(I16::new(255)), Some(U8::MAX));
    /// assert_eq!(U8::checked_from_int(I16::new(256)), None);
    /// assert_eq!(U8::checked_from_int(I16::new(-1)), None);
    /// ```
    #[inline]
    pub fn checked_from_int<S>(v: Int<S>) -> Option<Self>
    where
        S: IntPrimitive,
    {
        let wide = v.get().to_i128()?;
        if S::MIN_WIDE < T::MIN_WIDE && wide < T::MIN_WIDE {
            return None;
        }
        if S::MAX_WIDE > T::MAX_WIDE && wide > T::MAX_WIDE {
            return None;
        }
        T::from_i128(wide).map(Self::new)
    }

    /// Converts from another integer family member.
    ///
    /// # Panics
    ///
    /// Panics if the value is outside this type's `[MIN, MAX]` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::{I64, U32};
    ///
    /// let v = I64::from_int(U32::MAX);
    /// assert_eq!(v, I64::new(4_294_967_295));
    /// ```
    #[inline]
    pub fn from_int<S>(v: Int<S>) -> Self
    where
        S: IntPrimitive,
    {
        match Self::checked_from_int(v) {
            Some(value) => value,
            None => panic!("out of range integral type conversion attempted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::int::{I16, I32, I64, I8, U16, U32, U64, U8, Usize};

    #[test]
    fn test_widening_always_fits() {
        assert_eq!(I32::from_int(U8::MAX), I32::new(255));
        assert_eq!(I64::from_int(I8::MIN), I64::new(-128));
        assert_eq!(U64::from_int(U16::MAX), U64::new(65_535));
        assert_eq!(I64::from_int(U32::MAX), I64::new(4_294_967_295));
    }

    #[test]
    fn test_narrowing_checks_both_bounds() {
        assert_eq!(U8::checked_from_int(I32::new(0)), Some(U8::ZERO));
        assert_eq!(U8::checked_from_int(I32::new(255)), Some(U8::MAX));
        assert_eq!(U8::checked_from_int(I32::new(256)), None);
        assert_eq!(U8::checked_from_int(I32::new(-1)), None);
        assert_eq!(I8::checked_from_int(I32::new(-129)), None);
        assert_eq!(I8::checked_from_int(I32::new(-128)), Some(I8::MIN));
    }

    #[test]
    fn test_sign_boundary_between_same_widths() {
        assert_eq!(U64::checked_from_int(I64::new(-1)), None);
        assert_eq!(I64::checked_from_int(U64::MAX), None);
        assert_eq!(
            I64::checked_from_int(U64::new(i64::MAX as u64)),
            Some(I64::MAX)
        );
        assert_eq!(U16::checked_from_int(I16::new(-1)), None);
    }

    #[test]
    fn test_same_type_is_identity() {
        assert_eq!(I32::from_int(I32::MIN), I32::MIN);
        assert_eq!(U32::from_int(U32::MAX), U32::MAX);
    }

    #[test]
    fn test_pointer_width_conversions() {
        assert_eq!(Usize::from_int(U16::new(1000)), Usize::new(1000));
        assert_eq!(Usize::checked_from_int(I8::new(-1)), None);
    }

    #[test]
    #[should_panic(expected = "out of range integral type conversion attempted")]
    fn test_out_of_range_panics() {
        let _ = U8::from_int(I32::new(300));
    }
}
