// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word-level byte buffers and the GF(2^128) arithmetic used by
//! block-cipher MAC constructions.
//!
//! # WordBuffer
//!
//! [`WordBuffer`] stores an ordered byte sequence as big-endian-packed
//! 32-bit words with an explicit significant-byte length. The layout
//! makes the bit-exact operations that CMAC-family constructions need
//! cheap and uniform:
//!
//! - in-place bit shifts of arbitrary magnitude with carry-out
//! - destructive extraction of leading words or bytes
//! - XOR against the whole buffer or against its trailing bytes only
//! - clamping of stale storage beyond the significant length
//! - constant-time content equality
//!
//! # GF(2^128)
//!
//! [`gf128`] provides the doubling operation (and its inverse) over the
//! binary field used by AES-based MACs, together with the associated
//! constants (reduction polynomial, its pre-shifted form, and the
//! counter-IV mask).
//!
//! # Example
//!
//! ```rust
//! use parapet_buffer::WordBuffer;
//! use parapet_buffer::gf128;
//!
//! let mut block = WordBuffer::from_bytes(&[0u8; 16]);
//! gf128::dbl(&mut block);
//! assert_eq!(block.to_bytes(), [0u8; 16]);
//!
//! let mut buffer = WordBuffer::from_bytes(b"hello world");
//! let head = buffer.shift_bytes(5);
//! assert_eq!(head.to_bytes(), b"hello");
//! assert_eq!(buffer.to_bytes(), b" world");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod word_buffer;

pub mod gf128;
pub mod padding;

pub use error::BufferError;
pub use word_buffer::WordBuffer;
