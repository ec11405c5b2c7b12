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

//! # Primitive Trait Layer
//!
//! By-value capability traits over the bare machine primitives. The wrapper
//! types in `int` and `float` are implemented once, generically, against
//! these traits; the per-type knowledge (bounds, bit width, byte layout,
//! overflow-flagged intrinsics) lives here, stamped out by `macro_rules!`
//! delegation to the inherent primitive methods.
//!
//! ## Submodules
//!
//! - `int`: `IntPrimitive` plus the signedness refinements
//!   `SignedPrimitive` and `UnsignedPrimitive`, implemented for `i8`-`i64`,
//!   `isize`, `u8`-`u64`, and `usize`. The 128-bit widths are intentionally
//!   excluded.
//! - `float`: `FloatPrimitive`, implemented for `f32` and `f64`.
//!
//! ## Motivation
//!
//! The overflow-policy families are nearly identical across ten integer
//! widths. Rather than stamping the full method surface per width, the
//! surface is written once against a trait bound and only the leaf
//! delegation is macro-generated, the same pattern used for by-value
//! arithmetic traits elsewhere in this codebase's ancestry.

pub mod float;
pub mod int;
