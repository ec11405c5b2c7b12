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

//! Bit-pattern transmutation and byte serialization for `Float<T>`.
//!
//! `to_bits`/`from_bits` reinterpret the exact IEEE-754 bit pattern as the
//! same-width unsigned integer wrapper; they are transmutations, not
//! numeric casts. Byte round-trips are exact for every value; NaN payloads
//! are preserved within a single process and architecture.

use crate::float::Float;
use crate::int::Int;
use crate::primitive::float::FloatPrimitive;

impl<T> Float<T>
where
    T: FloatPrimitive,
{
    /// The raw IEEE-754 bit pattern as the same-width unsigned integer
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::{F32, U32};
    ///
    /// assert_eq!(F32::new(1.0).to_bits(), U32::new(0x3F80_0000));
    /// ```
    #[inline]
    pub fn to_bits(self) -> Int<T::Bits> {
        Int::new(self.value.to_bits())
    }

    /// Reinterprets an unsigned bit pattern as a float. Inverse of
    /// `to_bits`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ballast_num::{F32, U32};
    ///
    /// assert_eq!(F32::from_bits(U32::new(0x4000_0000)), F32::new(2.0));
    /// ```
    #[inline]
    pub fn from_bits(bits: Int<T::Bits>) -> Self {
        Self::new(T::from_bits(bits.get()))
    }

    /// The memory representation as a byte array in big-endian (network)
    /// order.
    #[inline]
    pub fn to_be_bytes(self) -> T::Bytes {
        self.value.to_be_bytes()
    }

    /// The memory representation as a byte array in little-endian order.
    #[inline]
    pub fn to_le_bytes(self) -> T::Bytes {
        self.value.to_le_bytes()
    }

    /// The memory representation as a byte array in native order.
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
