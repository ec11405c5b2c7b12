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

//! # Integer Primitive Traits
//!
//! By-value capability traits for the machine integer primitives, extending
//! `num_traits::PrimInt` with the overflow-detection surface the wrapper
//! types are built on: checked, overflowing, wrapping, and saturating
//! variants of every arithmetic operation, plus byte-level serialization and
//! widened compile-time bounds.
//!
//! ## Traits
//!
//! - `IntPrimitive`: everything common to the ten supported widths.
//! - `SignedPrimitive`: the signed refinements (`abs` family, mixed
//!   signed/unsigned arithmetic, the matching unsigned width).
//! - `UnsignedPrimitive`: the unsigned refinements (power-of-two family,
//!   mixed arithmetic with the matching signed width).
//!
//! The trait methods take their receivers by value, mirroring the inherent
//! primitive methods rather than the reference-based `num_traits` operation
//! traits. Implementations delegate straight to the intrinsics, so overflow
//! detection compiles down to the hardware overflow flags.
//!
//! ## Example
//!
//! ```rust
//! use ballast_num::primitive::int::IntPrimitive;
//!
//! fn add_all<T: IntPrimitive>(values: &[T]) -> Option<T> {
//!     values.iter().try_fold(T::ZERO, |acc, &v| acc.checked_add(v))
//! }
//!
//! assert_eq!(add_all(&[1u8, 2, 3]), Some(6));
//! assert_eq!(add_all(&[200u8, 100]), None);
//! ```

use std::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use std::hash::Hash;

use num_traits::{FromPrimitive, PrimInt, Saturating, Signed, Unsigned};

/// A machine integer primitive usable as the storage of an `Int` wrapper.
///
/// Extends `num_traits::PrimInt` with by-value overflow-policy operations,
/// Euclidean division, integer logarithms, and endianness-aware byte
/// serialization. Implemented for `i8`-`i64`, `isize`, `u8`-`u64`, and
/// `usize`; the 128-bit widths are intentionally excluded.
///
/// The `overflowing_*` family is the overflow-detection primitive underneath
/// every other policy: it performs the operation on the raw machine value and
/// reports whether the mathematical result exceeded the representable range.
/// Shift amounts at or above `BITS` are never issued to the machine shift;
/// the checked and overflowing forms short-circuit, and the wrapping forms
/// reduce the amount modulo `BITS` first.
pub trait IntPrimitive:
    PrimInt
    + Saturating
    + FromPrimitive
    + Default
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + Hash
    + Send
    + Sync
    + 'static
{
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
    /// The value `0`.
    const ZERO: Self;
    /// The value `1`.
    const ONE: Self;
    /// The width of the type in bits.
    const BITS: u32;
    /// `MIN` widened to `i128`, for cross-width bound comparisons that fold
    /// at compile time once monomorphized.
    const MIN_WIDE: i128;
    /// `MAX` widened to `i128`. Every supported width fits.
    const MAX_WIDE: i128;

    /// The byte-array form of the value, `[u8; N]` with `N` the storage size.
    type Bytes: Copy + PartialEq + Eq + Debug + AsRef<[u8]> + AsMut<[u8]> + Send + Sync + 'static;

    /// Checked addition. `None` if the sum would overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// Checked subtraction. `None` if the difference would overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    /// Checked multiplication. `None` if the product would overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// Checked division. `None` on a zero divisor or `MIN / -1`.
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// Checked remainder. `None` on a zero divisor or `MIN % -1`.
    fn checked_rem(self, rhs: Self) -> Option<Self>;
    /// Checked negation. `None` when the result is unrepresentable
    /// (`MIN` for signed types, any nonzero value for unsigned types).
    fn checked_neg(self) -> Option<Self>;
    /// Checked left shift. `None` when `rhs >= BITS`.
    fn checked_shl(self, rhs: u32) -> Option<Self>;
    /// Checked right shift. `None` when `rhs >= BITS`.
    fn checked_shr(self, rhs: u32) -> Option<Self>;
    /// Checked exponentiation by repeated squaring.
    fn checked_pow(self, exp: u32) -> Option<Self>;
    /// Checked Euclidean division.
    fn checked_div_euclid(self, rhs: Self) -> Option<Self>;
    /// Checked Euclidean remainder.
    fn checked_rem_euclid(self, rhs: Self) -> Option<Self>;
    /// Base-2 integer logarithm, rounded down. `None` when `self <= 0`.
    fn checked_ilog2(self) -> Option<u32>;
    /// Base-10 integer logarithm, rounded down. `None` when `self <= 0`.
    fn checked_ilog10(self) -> Option<u32>;

    /// Addition with an overflow flag; the value wraps on overflow.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    /// Subtraction with an overflow flag; the value wraps on overflow.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    /// Multiplication with an overflow flag; the value wraps on overflow.
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);
    /// Division with an overflow flag, set only for `MIN / -1` (which yields
    /// `MIN`).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn overflowing_div(self, rhs: Self) -> (Self, bool);
    /// Remainder with an overflow flag, set only for `MIN % -1` (which
    /// yields `0`).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn overflowing_rem(self, rhs: Self) -> (Self, bool);
    /// Negation with an overflow flag.
    fn overflowing_neg(self) -> (Self, bool);
    /// Left shift of the masked amount, flagging `rhs >= BITS`.
    fn overflowing_shl(self, rhs: u32) -> (Self, bool);
    /// Right shift of the masked amount, flagging `rhs >= BITS`.
    fn overflowing_shr(self, rhs: u32) -> (Self, bool);
    /// Exponentiation with an overflow flag; the value wraps on overflow.
    fn overflowing_pow(self, exp: u32) -> (Self, bool);
    /// Euclidean division with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn overflowing_div_euclid(self, rhs: Self) -> (Self, bool);
    /// Euclidean remainder with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn overflowing_rem_euclid(self, rhs: Self) -> (Self, bool);

    /// Wrapping (modular) addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Wrapping (modular) subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Wrapping (modular) multiplication.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Wrapping division; `MIN / -1` yields `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn wrapping_div(self, rhs: Self) -> Self;
    /// Wrapping remainder; `MIN % -1` yields `0`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn wrapping_rem(self, rhs: Self) -> Self;
    /// Wrapping negation; `MIN` yields `MIN`.
    fn wrapping_neg(self) -> Self;
    /// Left shift by `rhs % BITS`.
    fn wrapping_shl(self, rhs: u32) -> Self;
    /// Right shift by `rhs % BITS`.
    fn wrapping_shr(self, rhs: u32) -> Self;
    /// Wrapping exponentiation.
    fn wrapping_pow(self, exp: u32) -> Self;
    /// Wrapping Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn wrapping_div_euclid(self, rhs: Self) -> Self;
    /// Wrapping Euclidean remainder.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn wrapping_rem_euclid(self, rhs: Self) -> Self;

    /// Saturating multiplication, clamping to `MIN`/`MAX`.
    ///
    /// Saturating addition and subtraction come from the `Saturating`
    /// supertrait.
    fn saturating_mul(self, rhs: Self) -> Self;
    /// Saturating division; only `MIN / -1` saturates (to `MAX`).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn saturating_div(self, rhs: Self) -> Self;
    /// Saturating exponentiation.
    fn saturating_pow(self, exp: u32) -> Self;

    /// Unchecked addition.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self + rhs` does not overflow; otherwise
    /// the result is undefined behavior.
    unsafe fn unchecked_add(self, rhs: Self) -> Self;
    /// Unchecked subtraction.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self - rhs` does not overflow; otherwise
    /// the result is undefined behavior.
    unsafe fn unchecked_sub(self, rhs: Self) -> Self;
    /// Unchecked multiplication.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `self * rhs` does not overflow; otherwise
    /// the result is undefined behavior.
    unsafe fn unchecked_mul(self, rhs: Self) -> Self;

    /// The memory representation as bytes in big-endian order.
    fn to_be_bytes(self) -> Self::Bytes;
    /// The memory representation as bytes in little-endian order.
    fn to_le_bytes(self) -> Self::Bytes;
    /// The memory representation as bytes in native order.
    fn to_ne_bytes(self) -> Self::Bytes;
    /// Reconstructs a value from its big-endian byte representation.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
    /// Reconstructs a value from its little-endian byte representation.
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Reconstructs a value from its native-endian byte representation.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

/// A signed `IntPrimitive` with a same-width unsigned counterpart.
///
/// # Examples
///
/// ```rust
/// use ballast_num::primitive::int::SignedPrimitive;
///
/// fn magnitude<T: SignedPrimitive>(v: T) -> T::Unsigned {
///     v.unsigned_abs()
/// }
///
/// assert_eq!(magnitude(-128i8), 128u8);
/// ```
pub trait SignedPrimitive: IntPrimitive + Signed + std::ops::Neg<Output = Self> {
    /// The unsigned type of the same width.
    type Unsigned: UnsignedPrimitive;

    /// Checked absolute value. `None` for `MIN`.
    fn checked_abs(self) -> Option<Self>;
    /// Absolute value with an overflow flag; `MIN` yields `(MIN, true)`.
    fn overflowing_abs(self) -> (Self, bool);
    /// Wrapping absolute value; `MIN` yields `MIN`.
    fn wrapping_abs(self) -> Self;
    /// Saturating absolute value; `MIN` yields `MAX`.
    fn saturating_abs(self) -> Self;
    /// Saturating negation; `MIN` yields `MAX`.
    fn saturating_neg(self) -> Self;
    /// The absolute value as the matching unsigned type. Cannot overflow.
    fn unsigned_abs(self) -> Self::Unsigned;

    /// Checked addition of an unsigned value.
    fn checked_add_unsigned(self, rhs: Self::Unsigned) -> Option<Self>;
    /// Overflow-flagged addition of an unsigned value.
    fn overflowing_add_unsigned(self, rhs: Self::Unsigned) -> (Self, bool);
    /// Wrapping addition of an unsigned value.
    fn wrapping_add_unsigned(self, rhs: Self::Unsigned) -> Self;
    /// Saturating addition of an unsigned value.
    fn saturating_add_unsigned(self, rhs: Self::Unsigned) -> Self;
    /// Checked subtraction of an unsigned value.
    fn checked_sub_unsigned(self, rhs: Self::Unsigned) -> Option<Self>;
    /// Overflow-flagged subtraction of an unsigned value.
    fn overflowing_sub_unsigned(self, rhs: Self::Unsigned) -> (Self, bool);
    /// Wrapping subtraction of an unsigned value.
    fn wrapping_sub_unsigned(self, rhs: Self::Unsigned) -> Self;
    /// Saturating subtraction of an unsigned value.
    fn saturating_sub_unsigned(self, rhs: Self::Unsigned) -> Self;
}

/// An unsigned `IntPrimitive` with a same-width signed counterpart.
///
/// # Examples
///
/// ```rust
/// use ballast_num::primitive::int::UnsignedPrimitive;
///
/// fn round_up_capacity<T: UnsignedPrimitive>(v: T) -> Option<T> {
///     v.checked_next_power_of_two()
/// }
///
/// assert_eq!(round_up_capacity(200u8), None);
/// assert_eq!(round_up_capacity(100u8), Some(128));
/// ```
pub trait UnsignedPrimitive: IntPrimitive + Unsigned {
    /// The signed type of the same width.
    type Signed: SignedPrimitive;

    /// Whether exactly one bit is set.
    fn is_power_of_two(self) -> bool;
    /// The smallest power of two `>= self`. Overflow behavior follows the
    /// primitive; the wrapper's panicking form goes through the checked
    /// variant instead.
    fn next_power_of_two(self) -> Self;
    /// The smallest power of two `>= self`, or `None` if it would overflow.
    fn checked_next_power_of_two(self) -> Option<Self>;

    /// Checked addition of a signed value.
    fn checked_add_signed(self, rhs: Self::Signed) -> Option<Self>;
    /// Overflow-flagged addition of a signed value.
    fn overflowing_add_signed(self, rhs: Self::Signed) -> (Self, bool);
    /// Wrapping addition of a signed value.
    fn wrapping_add_signed(self, rhs: Self::Signed) -> Self;
    /// Saturating addition of a signed value.
    fn saturating_add_signed(self, rhs: Self::Signed) -> Self;
}

macro_rules! int_primitive_impl {
    ($t:ty) => {
        impl IntPrimitive for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const BITS: u32 = <$t>::BITS;
            const MIN_WIDE: i128 = <$t>::MIN as i128;
            const MAX_WIDE: i128 = <$t>::MAX as i128;

            type Bytes = [u8; std::mem::size_of::<$t>()];

            #[inline(always)]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }
            #[inline(always)]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }
            #[inline(always)]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
            #[inline(always)]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$t>::checked_div(self, rhs)
            }
            #[inline(always)]
            fn checked_rem(self, rhs: Self) -> Option<Self> {
                <$t>::checked_rem(self, rhs)
            }
            #[inline(always)]
            fn checked_neg(self) -> Option<Self> {
                <$t>::checked_neg(self)
            }
            #[inline(always)]
            fn checked_shl(self, rhs: u32) -> Option<Self> {
                <$t>::checked_shl(self, rhs)
            }
            #[inline(always)]
            fn checked_shr(self, rhs: u32) -> Option<Self> {
                <$t>::checked_shr(self, rhs)
            }
            #[inline(always)]
            fn checked_pow(self, exp: u32) -> Option<Self> {
                <$t>::checked_pow(self, exp)
            }
            #[inline(always)]
            fn checked_div_euclid(self, rhs: Self) -> Option<Self> {
                <$t>::checked_div_euclid(self, rhs)
            }
            #[inline(always)]
            fn checked_rem_euclid(self, rhs: Self) -> Option<Self> {
                <$t>::checked_rem_euclid(self, rhs)
            }
            #[inline(always)]
            fn checked_ilog2(self) -> Option<u32> {
                <$t>::checked_ilog2(self)
            }
            #[inline(always)]
            fn checked_ilog10(self) -> Option<u32> {
                <$t>::checked_ilog10(self)
            }

            #[inline(always)]
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }
            #[inline(always)]
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }
            #[inline(always)]
            fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_mul(self, rhs)
            }
            #[inline(always)]
            fn overflowing_div(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_div(self, rhs)
            }
            #[inline(always)]
            fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_rem(self, rhs)
            }
            #[inline(always)]
            fn overflowing_neg(self) -> (Self, bool) {
                <$t>::overflowing_neg(self)
            }
            #[inline(always)]
            fn overflowing_shl(self, rhs: u32) -> (Self, bool) {
                <$t>::overflowing_shl(self, rhs)
            }
            #[inline(always)]
            fn overflowing_shr(self, rhs: u32) -> (Self, bool) {
                <$t>::overflowing_shr(self, rhs)
            }
            #[inline(always)]
            fn overflowing_pow(self, exp: u32) -> (Self, bool) {
                <$t>::overflowing_pow(self, exp)
            }
            #[inline(always)]
            fn overflowing_div_euclid(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_div_euclid(self, rhs)
            }
            #[inline(always)]
            fn overflowing_rem_euclid(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_rem_euclid(self, rhs)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }
            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }
            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }
            #[inline(always)]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }
            #[inline(always)]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }
            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }
            #[inline(always)]
            fn wrapping_shl(self, rhs: u32) -> Self {
                <$t>::wrapping_shl(self, rhs)
            }
            #[inline(always)]
            fn wrapping_shr(self, rhs: u32) -> Self {
                <$t>::wrapping_shr(self, rhs)
            }
            #[inline(always)]
            fn wrapping_pow(self, exp: u32) -> Self {
                <$t>::wrapping_pow(self, exp)
            }
            #[inline(always)]
            fn wrapping_div_euclid(self, rhs: Self) -> Self {
                <$t>::wrapping_div_euclid(self, rhs)
            }
            #[inline(always)]
            fn wrapping_rem_euclid(self, rhs: Self) -> Self {
                <$t>::wrapping_rem_euclid(self, rhs)
            }

            #[inline(always)]
            fn saturating_mul(self, rhs: Self) -> Self {
                <$t>::saturating_mul(self, rhs)
            }
            #[inline(always)]
            fn saturating_div(self, rhs: Self) -> Self {
                <$t>::saturating_div(self, rhs)
            }
            #[inline(always)]
            fn saturating_pow(self, exp: u32) -> Self {
                <$t>::saturating_pow(self, exp)
            }

            #[inline(always)]
            unsafe fn unchecked_add(self, rhs: Self) -> Self {
                <$t>::unchecked_add(self, rhs)
            }
            #[inline(always)]
            unsafe fn unchecked_sub(self, rhs: Self) -> Self {
                <$t>::unchecked_sub(self, rhs)
            }
            #[inline(always)]
            unsafe fn unchecked_mul(self, rhs: Self) -> Self {
                <$t>::unchecked_mul(self, rhs)
            }

            #[inline(always)]
            fn to_be_bytes(self) -> Self::Bytes {
                <$t>::to_be_bytes(self)
            }
            #[inline(always)]
            fn to_le_bytes(self) -> Self::Bytes {
                <$t>::to_le_bytes(self)
            }
            #[inline(always)]
            fn to_ne_bytes(self) -> Self::Bytes {
                <$t>::to_ne_bytes(self)
            }
            #[inline(always)]
            fn from_be_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from_be_bytes(bytes)
            }
            #[inline(always)]
            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from_le_bytes(bytes)
            }
            #[inline(always)]
            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from_ne_bytes(bytes)
            }
        }
    };
}

int_primitive_impl!(i8);
int_primitive_impl!(i16);
int_primitive_impl!(i32);
int_primitive_impl!(i64);
int_primitive_impl!(isize);
int_primitive_impl!(u8);
int_primitive_impl!(u16);
int_primitive_impl!(u32);
int_primitive_impl!(u64);
int_primitive_impl!(usize);

macro_rules! signed_primitive_impl {
    ($t:ty, $u:ty) => {
        impl SignedPrimitive for $t {
            type Unsigned = $u;

            #[inline(always)]
            fn checked_abs(self) -> Option<Self> {
                <$t>::checked_abs(self)
            }
            #[inline(always)]
            fn overflowing_abs(self) -> (Self, bool) {
                <$t>::overflowing_abs(self)
            }
            #[inline(always)]
            fn wrapping_abs(self) -> Self {
                <$t>::wrapping_abs(self)
            }
            #[inline(always)]
            fn saturating_abs(self) -> Self {
                <$t>::saturating_abs(self)
            }
            #[inline(always)]
            fn saturating_neg(self) -> Self {
                <$t>::saturating_neg(self)
            }
            #[inline(always)]
            fn unsigned_abs(self) -> Self::Unsigned {
                <$t>::unsigned_abs(self)
            }

            #[inline(always)]
            fn checked_add_unsigned(self, rhs: Self::Unsigned) -> Option<Self> {
                <$t>::checked_add_unsigned(self, rhs)
            }
            #[inline(always)]
            fn overflowing_add_unsigned(self, rhs: Self::Unsigned) -> (Self, bool) {
                <$t>::overflowing_add_unsigned(self, rhs)
            }
            #[inline(always)]
            fn wrapping_add_unsigned(self, rhs: Self::Unsigned) -> Self {
                <$t>::wrapping_add_unsigned(self, rhs)
            }
            #[inline(always)]
            fn saturating_add_unsigned(self, rhs: Self::Unsigned) -> Self {
                <$t>::saturating_add_unsigned(self, rhs)
            }
            #[inline(always)]
            fn checked_sub_unsigned(self, rhs: Self::Unsigned) -> Option<Self> {
                <$t>::checked_sub_unsigned(self, rhs)
            }
            #[inline(always)]
            fn overflowing_sub_unsigned(self, rhs: Self::Unsigned) -> (Self, bool) {
                <$t>::overflowing_sub_unsigned(self, rhs)
            }
            #[inline(always)]
            fn wrapping_sub_unsigned(self, rhs: Self::Unsigned) -> Self {
                <$t>::wrapping_sub_unsigned(self, rhs)
            }
            #[inline(always)]
            fn saturating_sub_unsigned(self, rhs: Self::Unsigned) -> Self {
                <$t>::saturating_sub_unsigned(self, rhs)
            }
        }
    };
}

signed_primitive_impl!(i8, u8);
signed_primitive_impl!(i16, u16);
signed_primitive_impl!(i32, u32);
signed_primitive_impl!(i64, u64);
signed_primitive_impl!(isize, usize);

macro_rules! unsigned_primitive_impl {
    ($t:ty, $s:ty) => {
        impl UnsignedPrimitive for $t {
            type Signed = $s;

            #[inline(always)]
            fn is_power_of_two(self) -> bool {
                <$t>::is_power_of_two(self)
            }
            #[inline(always)]
            fn next_power_of_two(self) -> Self {
                <$t>::next_power_of_two(self)
            }
            #[inline(always)]
            fn checked_next_power_of_two(self) -> Option<Self> {
                <$t>::checked_next_power_of_two(self)
            }

            #[inline(always)]
            fn checked_add_signed(self, rhs: Self::Signed) -> Option<Self> {
                <$t>::checked_add_signed(self, rhs)
            }
            #[inline(always)]
            fn overflowing_add_signed(self, rhs: Self::Signed) -> (Self, bool) {
                <$t>::overflowing_add_signed(self, rhs)
            }
            #[inline(always)]
            fn wrapping_add_signed(self, rhs: Self::Signed) -> Self {
                <$t>::wrapping_add_signed(self, rhs)
            }
            #[inline(always)]
            fn saturating_add_signed(self, rhs: Self::Signed) -> Self {
                <$t>::saturating_add_signed(self, rhs)
            }
        }
    };
}

unsigned_primitive_impl!(u8, i8);
unsigned_primitive_impl!(u16, i16);
unsigned_primitive_impl!(u32, i32);
unsigned_primitive_impl!(u64, i64);
unsigned_primitive_impl!(usize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn overflowing_add<T: IntPrimitive>(a: T, b: T) -> (T, bool) {
        a.overflowing_add(b)
    }
    fn checked_shl<T: IntPrimitive>(a: T, b: u32) -> Option<T> {
        a.checked_shl(b)
    }

    #[test]
    fn test_overflow_detection_reports_wrapped_value() {
        assert_eq!(overflowing_add(255u8, 1u8), (0u8, true));
        assert_eq!(overflowing_add(127i8, 1i8), (-128i8, true));
        assert_eq!(overflowing_add(100i8, 20i8), (120i8, false));
    }

    #[test]
    fn test_shift_at_bit_width_short_circuits() {
        // The machine shift is undefined at full width; the checked form
        // must report overflow instead of issuing it.
        assert_eq!(checked_shl(1u32, 32), None);
        assert_eq!(checked_shl(1u32, 31), Some(1u32 << 31));
        assert_eq!(1u32.overflowing_shl(33), (2u32, true));
        assert_eq!(IntPrimitive::wrapping_shl(1u32, 33), 2u32);
    }

    #[test]
    fn test_division_overflow_cases() {
        assert_eq!(IntPrimitive::checked_div(i8::MIN, -1i8), None);
        assert_eq!(IntPrimitive::checked_div(10i8, 0i8), None);
        assert_eq!(IntPrimitive::wrapping_div(i8::MIN, -1i8), i8::MIN);
        assert_eq!(IntPrimitive::wrapping_rem(i8::MIN, -1i8), 0i8);
        assert_eq!(IntPrimitive::saturating_div(i8::MIN, -1i8), i8::MAX);
    }

    #[test]
    fn test_widened_bounds_cover_all_widths() {
        assert_eq!(<u64 as IntPrimitive>::MAX_WIDE, u64::MAX as i128);
        assert_eq!(<i64 as IntPrimitive>::MIN_WIDE, i64::MIN as i128);
        assert_eq!(<u8 as IntPrimitive>::MIN_WIDE, 0);
        assert!(<u64 as IntPrimitive>::MAX_WIDE > <i64 as IntPrimitive>::MAX_WIDE);
    }

    #[test]
    fn test_signed_unsigned_pairing() {
        assert_eq!(<i8 as SignedPrimitive>::unsigned_abs(-128i8), 128u8);
        assert_eq!(<u8 as UnsignedPrimitive>::checked_add_signed(1u8, -2i8), None);
        assert_eq!(<u8 as UnsignedPrimitive>::checked_add_signed(1u8, 2i8), Some(3u8));
    }

    #[test]
    fn test_byte_round_trip() {
        let v = 0x1234_5678_9ABC_DEF0u64;
        assert_eq!(u64::from_be_bytes(IntPrimitive::to_be_bytes(v)), v);
        assert_eq!(u64::from_le_bytes(IntPrimitive::to_le_bytes(v)), v);
        assert_eq!(
            IntPrimitive::to_be_bytes(0x0102u16),
            [0x01, 0x02]
        );
        assert_eq!(
            IntPrimitive::to_le_bytes(0x0102u16),
            [0x02, 0x01]
        );
    }

    #[test]
    fn test_ilog_delegation() {
        assert_eq!(IntPrimitive::checked_ilog2(8u32), Some(3));
        assert_eq!(IntPrimitive::checked_ilog2(0u32), None);
        assert_eq!(IntPrimitive::checked_ilog10(99u32), Some(1));
        assert_eq!(IntPrimitive::checked_ilog2(-4i32), None);
    }
}
