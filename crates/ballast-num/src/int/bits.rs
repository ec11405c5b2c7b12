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

//! Bit-level operations and endianness serialization for `Int<T>`.
//!
//! Bit counting, rotation, and byte swapping act on the unsigned bit
//! pattern and have no overflow concept; rotation reduces its amount
//! modulo the bit width, unlike shifting, which treats amounts at or above
//! the width as overflow. Byte serialization round-trips exactly in all
//! three orders: `from_xx_bytes(to_xx_bytes(v)) == v`.

use crate::int::Int;
use crate::primitive::int::IntPrimitive;

impl<T> Int<T>
where
    T: IntPrimitive,
{
    /// The number of one bits.
    #[inline]
    pub fn count_ones(self) -> u32 {
        self.value.count_ones()
    }

    /// The number of zero bits.
    #[inline]
    pub fn count_zeros(self) -> u32 {
        self.value.count_zeros()
    }

    /// The number of leading zero bits.
    #[inline]
    pub fn leading_zeros(self) -> u32 {
        self.value.leading_zeros()
    }

    /// The number of trailing zero bits.
    #[inline]
    pub fn trailing_zeros(self) -> u32 {
        self.value.trailing_zeros()
    }

    /// The number of leading one bits.
    #[inline]
    pub fn leading_ones(self) -> u32 {
        self.value.leading_ones()
    }

    /// The number of trailing one bits.
    #[inline]
    pub fn trailing_ones(self) -> u32 {
        self.value.trailing_ones()
    }

    /// Reverses the bit order of the value.
    #[inline]
    pub fn reverse_bits(self) -> Self {
        Self::new(self.value.reverse_bits())
    }

    /// Rotates the bits left by `n % BITS` positions. Unlike shifting,
    /// rotation never overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::U8;
    ///
    /// assert_eq!(U8::new(0b1000_0001).rotate_left(1), U8::new(0b0000_0011));
    /// assert_eq!(U8::new(1).rotate_left(9), U8::new(2));
    /// ```
    #[inline]
    pub fn rotate_left(self, n: u32) -> Self {
        Self::new(self.value.rotate_left(n))
    }

    /// Rotates the bits right by `n % BITS` positions.
    #[inline]
    pub fn rotate_right(self, n: u32) -> Self {
        Self::new(self.value.rotate_right(n))
    }

    /// Reverses the byte order of the value.
    #[inline]
    pub fn swap_bytes(self) -> Self {
        Self::new(self.value.swap_bytes())
    }

    /// Checked left shift. `None` when `rhs` is at or above the bit width;
    /// the machine shift is never issued with such an amount.
    #[inline]
    pub fn checked_shl(self, rhs: u32) -> Option<Self> {
        self.value.checked_shl(rhs).map(Self::new)
    }

    /// Checked right shift. `None` when `rhs` is at or above the bit width.
    #[inline]
    pub fn checked_shr(self, rhs: u32) -> Option<Self> {
        self.value.checked_shr(rhs).map(Self::new)
    }

    /// Left shift of `rhs % BITS`, flagging amounts at or above the width.
    #[inline]
    pub fn overflowing_shl(self, rhs: u32) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_shl(rhs);
        (Self::new(value), overflow)
    }

    /// Right shift of `rhs % BITS`, flagging amounts at or above the width.
    #[inline]
    pub fn overflowing_shr(self, rhs: u32) -> (Self, bool) {
        let (value, overflow) = self.value.overflowing_shr(rhs);
        (Self::new(value), overflow)
    }

    /// Left shift by `rhs % BITS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::U32;
    ///
    /// assert_eq!(U32::new(1).wrapping_shl(33), U32::new(2));
    /// ```
    #[inline]
    pub fn wrapping_shl(self, rhs: u32) -> Self {
        Self::new(self.value.wrapping_shl(rhs))
    }

    /// Right shift by `rhs % BITS`.
    #[inline]
    pub fn wrapping_shr(self, rhs: u32) -> Self {
        Self::new(self.value.wrapping_shr(rhs))
    }

    /// Converts a big-endian value to the host's endianness. On big-endian
    /// hosts this is the identity; elsewhere the bytes are swapped.
    #[inline]
    pub fn from_be(v: Self) -> Self {
        Self::new(T::from_be(v.value))
    }

    /// Converts a little-endian value to the host's endianness.
    #[inline]
    pub fn from_le(v: Self) -> Self {
        Self::new(T::from_le(v.value))
    }

    /// Converts the value to big-endian from the host's endianness.
    #[inline]
    pub fn to_be(self) -> Self {
        Self::new(self.value.to_be())
    }

    /// Converts the value to little-endian from the host's endianness.
    #[inline]
    pub fn to_le(self) -> Self {
        Self::new(self.value.to_le())
    }

    /// The memory representation as a byte array in big-endian (network)
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::U16;
    ///
    /// assert_eq!(U16::new(0x0102).to_be_bytes(), [0x01, 0x02]);
    /// assert_eq!(U16::new(0x0102).to_le_bytes(), [0x02, 0x01]);
    /// ```
    #[inline]
    pub fn to_be_bytes(self) -> T::Bytes {
        self.value.to_be_bytes()
    }

    /// The memory representation as a byte array in little-endian order.
    #[inline]
    pub fn to_le_bytes(self) -> T::Bytes {
        self.value.to_le_bytes()
    }

    /// The memory representation as a byte array in native order. Portable
    /// code should prefer the explicit orders.
    #[inline]
    pub fn to_ne_bytes(self) -> T::Bytes {
        self.value.to_ne_bytes()
    }

    /// Reconstructs a value from its big-endian byte representation.
    #[inline]
    pub fn from_be_bytes(bytes: T::Bytes) -> Self {
        Self::new(T::from_be_bytes(bytes))
    }

    /// Reconstructs a value from its little-endian byte representation.
    #[inline]
    pub fn from_le_bytes(bytes: T::Bytes) -> Self {
        Self::new(T::from_le_bytes(bytes))
    }

    /// Reconstructs a value from its native-endian byte representation.
    #[inline]
    pub fn from_ne_bytes(bytes: T::Bytes) -> Self {
        Self::new(T::from_ne_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use crate::int::{I16, I32, U32, U8};
    use crate::primitive::int::IntPrimitive;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bit_counts() {
        assert_eq!(U8::new(0b1011_0000).count_ones(), 3);
        assert_eq!(U8::new(0b1011_0000).count_zeros(), 5);
        assert_eq!(U8::new(0b0001_0000).leading_zeros(), 3);
        assert_eq!(U8::new(0b0001_0000).trailing_zeros(), 4);
        assert_eq!(U8::new(0b1110_0001).leading_ones(), 3);
        assert_eq!(U8::new(0b1110_0011).trailing_ones(), 2);
        assert_eq!(I32::new(-1).count_ones(), 32);
    }

    #[test]
    fn test_reverse_and_swap() {
        assert_eq!(U8::new(0b1000_0010).reverse_bits(), U8::new(0b0100_0001));
        assert_eq!(I16::new(0x0102).swap_bytes(), I16::new(0x0201));
        assert_eq!(U32::new(0x0102_0304).swap_bytes(), U32::new(0x0403_0201));
    }

    #[test]
    fn test_rotation_takes_amount_modulo_width() {
        assert_eq!(U32::new(1).rotate_left(32), U32::new(1));
        assert_eq!(U32::new(1).rotate_left(33), U32::new(2));
        assert_eq!(U32::new(2).rotate_right(33), U32::new(1));
        assert_eq!(U8::new(0b1000_0001).rotate_right(1), U8::new(0b1100_0000));
    }

    #[test]
    fn test_shift_policies_at_width() {
        assert_eq!(U32::new(1).checked_shl(31), Some(U32::new(1 << 31)));
        assert_eq!(U32::new(1).checked_shl(32), None);
        assert_eq!(U32::new(1).checked_shr(32), None);
        assert_eq!(U32::new(1).overflowing_shl(33), (U32::new(2), true));
        assert_eq!(U32::new(1).overflowing_shl(1), (U32::new(2), false));
        assert_eq!(U32::new(1).wrapping_shl(33), U32::new(2));
        assert_eq!(U32::new(4).wrapping_shr(33), U32::new(2));
    }

    #[test]
    fn test_endian_value_conversions() {
        let v = U32::new(0x0102_0304);
        if cfg!(target_endian = "little") {
            assert_eq!(v.to_be(), v.swap_bytes());
            assert_eq!(v.to_le(), v);
        } else {
            assert_eq!(v.to_be(), v);
            assert_eq!(v.to_le(), v.swap_bytes());
        }
        assert_eq!(U32::from_be(v.to_be()), v);
        assert_eq!(U32::from_le(v.to_le()), v);
    }

    #[test]
    fn test_byte_orders_are_well_defined() {
        let v = I32::new(0x0102_0304);
        assert_eq!(v.to_be_bytes(), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(v.to_le_bytes(), [0x04, 0x03, 0x02, 0x01]);
        let ne = v.to_ne_bytes();
        if cfg!(target_endian = "little") {
            assert_eq!(ne, v.to_le_bytes());
        } else {
            assert_eq!(ne, v.to_be_bytes());
        }
    }

    #[test]
    fn test_byte_round_trip_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = I32::new(rng.gen());
            assert_eq!(I32::from_be_bytes(v.to_be_bytes()), v);
            assert_eq!(I32::from_le_bytes(v.to_le_bytes()), v);
            assert_eq!(I32::from_ne_bytes(v.to_ne_bytes()), v);
        }
    }

    #[test]
    fn test_wrapping_add_is_modular_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let (a, b): (u32, u32) = (rng.gen(), rng.gen());
            let expected = ((a as u64 + b as u64) & u64::from(u32::MAX)) as u32;
            assert_eq!(U32::new(a).wrapping_add(U32::new(b)).get(), expected);
            let (value, overflow) = U32::new(a).overflowing_add(U32::new(b));
            assert_eq!(value.get(), expected);
            assert_eq!(overflow, (a as u64 + b as u64) > u64::from(u32::MAX));
            assert_eq!(
                U32::new(a).checked_add(U32::new(b)).is_none(),
                overflow
            );
        }
    }

    #[test]
    fn test_bits_constant_matches_type() {
        assert_eq!(<u8 as IntPrimitive>::BITS, 8);
        assert_eq!(U32::BITS, 32);
        assert_eq!(I16::BITS, 16);
    }
}
