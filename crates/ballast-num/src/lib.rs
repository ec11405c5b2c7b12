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

//! # Ballast Num
//!
//! Safe fixed-width numeric types with explicit overflow policies. This crate
//! wraps the machine integer and IEEE-754 floating-point primitives in types
//! whose default operators never wrap silently: arithmetic that exceeds the
//! representable range panics, and callers opt into recovery by choosing a
//! `checked_*`, `overflowing_*`, `saturating_*`, `wrapping_*`, or
//! `unchecked_*` variant instead.
//!
//! ## Modules
//!
//! - `primitive`: The raw-machine-value trait layer. `IntPrimitive`,
//!   `SignedPrimitive`, `UnsignedPrimitive`, and `FloatPrimitive` describe the
//!   capabilities of the underlying primitives (overflow detection, bit
//!   manipulation, byte serialization) and are implemented for the core types
//!   by delegation to their intrinsic methods.
//! - `int`: The integer wrapper family. A single generic `Int<T>` carries the
//!   whole operator and method surface once; `I8` through `I64`, `Isize`,
//!   `U8` through `U64`, and `Usize` are thin aliases.
//! - `float`: The floating-point wrapper family, `F32` and `F64`, covering
//!   constants, IEEE partial and total ordering, classification, the
//!   transcendental function set, and bit-pattern transmutation.
//!
//! ## Overflow policy variants
//!
//! Every fallible integer operation exists in up to six forms with a uniform
//! contract:
//!
//! | Form | On overflow |
//! |---|---|
//! | operator (`+`, `-`, ...) | panics |
//! | `checked_*` | returns `None` |
//! | `overflowing_*` | returns `(wrapped, true)` |
//! | `saturating_*` | clamps to `MIN`/`MAX` |
//! | `wrapping_*` | two's-complement truncation |
//! | `unchecked_*` | undefined behavior (caller-asserted) |
//!
//! Unlike the bare primitives, the panicking forms panic in every build
//! profile, not only with debug assertions enabled.
//!
//! ## Example
//!
//! ```rust
//! use ballast_num::{I8, I32, U32};
//!
//! let a = I8::new(100);
//! let b = I8::new(20);
//! assert_eq!(a.checked_add(b), Some(I8::new(120)));
//! assert_eq!(I8::new(120).checked_add(I8::new(10)), None);
//! assert_eq!(a.saturating_add(I8::MAX), I8::MAX);
//!
//! // Cross-width conversion checks only the bounds that can actually fail.
//! let wide = I32::from_int(a);
//! assert_eq!(wide, I32::new(100));
//!
//! // Wrapping shifts reduce the amount modulo the bit width.
//! assert_eq!(U32::new(1).wrapping_shl(33), U32::new(2));
//! ```

pub mod float;
pub mod int;
pub mod primitive;

pub use float::{Float, F32, F64};
pub use int::{Int, I16, I32, I64, I8, Isize, U16, U32, U64, U8, Usize};
