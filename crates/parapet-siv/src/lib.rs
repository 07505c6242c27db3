// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic authenticated encryption per RFC 5297 (AES-SIV),
//! built on the S2V vector hash and a counter-mode keystream.
//!
//! SIV is deliberately nonce-free at this layer: identical
//! `(key, associated data, plaintext)` always yields identical output.
//! Callers who want nonce-based behavior pass the nonce as the final
//! associated-data field.
//!
//! ```rust
//! use parapet_siv::Siv;
//!
//! let siv = Siv::new(&[0u8; 32])?;
//! let sealed = siv.encrypt(&[b"header"], b"payload")?;
//! let opened = siv.decrypt(&[b"header"], &sealed)?;
//! assert_eq!(opened, b"payload");
//! # Ok::<(), parapet_siv::SivError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod s2v;
mod siv;

pub use error::SivError;
pub use s2v::S2v;
pub use siv::Siv;
