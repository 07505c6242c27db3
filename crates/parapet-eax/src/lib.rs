// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EAX nonce-based authenticated encryption (Bellare–Rogaway–Wagner),
//! composed from domain-separated CMAC and a counter-mode keystream.
//!
//! One-shot use:
//!
//! ```rust
//! use parapet_eax::{Eax, EaxOptions};
//!
//! let mut eax = Eax::new(&[0u8; 16], EaxOptions::default())?;
//! let sealed = eax.encrypt(b"payload", b"unique nonce", &[b"header"])?;
//! let opened = eax.decrypt(&sealed, b"unique nonce", &[b"header"])?;
//! assert_eq!(opened, b"payload");
//! # Ok::<(), parapet_eax::EaxError>(())
//! ```
//!
//! For large or incrementally-available payloads the streaming surface
//! ([`update_aad`](Eax::update_aad), [`init_crypt`](Eax::init_crypt),
//! [`update`](Eax::update), [`finalize`](Eax::finalize)) processes
//! chunks as they arrive; during decryption the trailing tag-length
//! bytes are held back automatically until finalization.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod eax;
mod error;

pub use eax::{Eax, EaxOptions};
pub use error::EaxError;
