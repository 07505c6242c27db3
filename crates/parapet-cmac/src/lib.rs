// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming CMAC per NIST SP 800-38B / RFC 4493, with the OMAC2
//! subkey variant.
//!
//! The engine is generic over the [`BlockCipher`] capability; AES-keyed
//! convenience constructors and a one-shot helper cover the common
//! case:
//!
//! ```rust
//! use parapet_cmac::aes_cmac;
//!
//! let key = [0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c];
//! let tag = aes_cmac(&key, b"")?;
//! assert_eq!(tag[..4], [0xbb, 0x1d, 0x69, 0x29]);
//! # Ok::<(), parapet_cmac::CmacError>(())
//! ```
//!
//! [`BlockCipher`]: parapet_cipher::BlockCipher

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod cmac;
mod error;

pub use cmac::{Cmac, MacVariant, TAG_LEN, Tag, aes_cmac, mac};
pub use error::CmacError;
