// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Authenticated-encryption toolkit over a 128-bit block cipher.</em></p>
//!
//! ---
//!
//! Parapet is a small workspace of crates implementing the CMAC family
//! of constructions end to end: a word-level buffer layer with exact
//! bit semantics, the CMAC (OMAC1/OMAC2) message-authentication
//! engine, the RFC 5297 S2V vector hash, SIV deterministic
//! authenticated encryption, and EAX nonce-based authenticated
//! encryption.
//!
//! # Features
//!
//! - **Deterministic AEAD (SIV)** — misuse-resistant; identical
//!   inputs give identical output, nonces ride along as an
//!   associated-data field
//! - **Nonce-based AEAD (EAX)** — streaming surface for large or
//!   incrementally-available payloads, configurable tag length
//! - **Streaming CMAC** — RFC 4493 semantics with the OMAC2 subkey
//!   variant
//! - **Typed failure modes** — authentication failure is a dedicated
//!   error variant; no plaintext escapes a failed decryption
//! - **`no_std` compatible** — `alloc` only, no platform dependencies
//!
//! # Quick Start
//!
//! Deterministic encryption with SIV:
//!
//! ```rust
//! use parapet::siv::Siv;
//!
//! fn main() -> Result<(), parapet::siv::SivError> {
//!     let siv = Siv::new(&[0u8; 32])?;
//!
//!     // The nonce is just the final associated-data field.
//!     let sealed = siv.encrypt(&[b"header", b"nonce-0001"], b"payload")?;
//!     let opened = siv.decrypt(&[b"header", b"nonce-0001"], &sealed)?;
//!     assert_eq!(opened, b"payload");
//!
//!     Ok(())
//! }
//! ```
//!
//! Nonce-based encryption with EAX:
//!
//! ```rust
//! use parapet::eax::{Eax, EaxOptions};
//!
//! fn main() -> Result<(), parapet::eax::EaxError> {
//!     let mut eax = Eax::new(&[0u8; 16], EaxOptions::default())?;
//!
//!     let sealed = eax.encrypt(b"payload", b"unique nonce", &[b"header"])?;
//!     let opened = eax.decrypt(&sealed, b"unique nonce", &[b"header"])?;
//!     assert_eq!(opened, b"payload");
//!
//!     Ok(())
//! }
//! ```
//!
//! Streaming a large payload through EAX:
//!
//! ```rust
//! use parapet::eax::{Eax, EaxOptions};
//!
//! fn main() -> Result<(), parapet::eax::EaxError> {
//!     let mut eax = Eax::new(&[0u8; 16], EaxOptions::default())?;
//!
//!     eax.update_aad(b"header")?;
//!     eax.init_crypt(true, b"unique nonce")?;
//!
//!     let mut sealed = Vec::new();
//!     for chunk in [&b"first "[..], &b"second "[..], &b"third"[..]] {
//!         sealed.extend(eax.update(chunk)?);
//!     }
//!     sealed.extend(eax.finalize(&[])?);
//!
//!     assert_eq!(eax.decrypt(&sealed, b"unique nonce", &[b"header"])?, b"first second third");
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Crate | Concern |
//! |-------|---------|
//! | `parapet-buffer` | word-level byte buffers, GF(2^128) doubling, one-zero padding |
//! | `parapet-cipher` | block-cipher / keystream capability traits, AES adapters |
//! | `parapet-cmac`   | streaming CMAC (OMAC1/OMAC2) |
//! | `parapet-siv`    | S2V vector hash and SIV deterministic AEAD |
//! | `parapet-eax`    | EAX nonce-based AEAD |
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use parapet_buffer as buffer;
pub use parapet_cipher as cipher;
pub use parapet_cmac as cmac;
pub use parapet_eax as eax;
pub use parapet_siv as siv;
