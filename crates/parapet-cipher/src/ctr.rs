// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES counter-mode keystream adapter.
//!
//! Uses a full-width big-endian 128-bit counter, matching the IV
//! masking convention of RFC 5297 Section 2.5.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};

use crate::consts::Block;
use crate::error::CipherError;
use crate::traits::KeystreamCipher;

/// AES-CTR keystream capability, variant selected by key length.
pub enum AesCtr {
    /// AES-128-CTR (16-byte key)
    Aes128(ctr::Ctr128BE<Aes128>),
    /// AES-192-CTR (24-byte key)
    Aes192(ctr::Ctr128BE<Aes192>),
    /// AES-256-CTR (32-byte key)
    Aes256(ctr::Ctr128BE<Aes256>),
}

impl AesCtr {
    /// Creates the keystream for a 16-, 24- or 32-byte key and a
    /// 16-byte initializing value.
    pub fn new(key: &[u8], iv: &Block) -> Result<Self, CipherError> {
        let iv = GenericArray::from_slice(iv);
        match key.len() {
            16 => Ok(Self::Aes128(ctr::Ctr128BE::<Aes128>::new(
                GenericArray::from_slice(key),
                iv,
            ))),
            24 => Ok(Self::Aes192(ctr::Ctr128BE::<Aes192>::new(
                GenericArray::from_slice(key),
                iv,
            ))),
            32 => Ok(Self::Aes256(ctr::Ctr128BE::<Aes256>::new(
                GenericArray::from_slice(key),
                iv,
            ))),
            len => Err(CipherError::InvalidKeyLength { len }),
        }
    }
}

impl KeystreamCipher for AesCtr {
    fn apply_keystream(&mut self, data: &mut [u8]) {
        match self {
            Self::Aes128(cipher) => cipher.apply_keystream(data),
            Self::Aes192(cipher) => cipher.apply_keystream(data),
            Self::Aes256(cipher) => cipher.apply_keystream(data),
        }
    }
}

impl core::fmt::Debug for AesCtr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Aes128(_) => "Aes128",
            Self::Aes192(_) => "Aes192",
            Self::Aes256(_) => "Aes256",
        };
        f.debug_tuple("AesCtr").field(&name).finish()
    }
}
