// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES block-cipher adapter.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::consts::Block;
use crate::error::CipherError;
use crate::traits::BlockCipher;

/// AES encryption capability, variant selected by key length.
///
/// The key schedule is expanded once at construction; the instance can
/// then encrypt any number of blocks.
#[derive(Clone)]
pub enum AesBlockCipher {
    /// AES-128 (16-byte key)
    Aes128(Aes128),
    /// AES-192 (24-byte key)
    Aes192(Aes192),
    /// AES-256 (32-byte key)
    Aes256(Aes256),
}

impl AesBlockCipher {
    /// Creates the cipher for a 16-, 24- or 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        match key.len() {
            16 => Ok(Self::Aes128(Aes128::new(GenericArray::from_slice(key)))),
            24 => Ok(Self::Aes192(Aes192::new(GenericArray::from_slice(key)))),
            32 => Ok(Self::Aes256(Aes256::new(GenericArray::from_slice(key)))),
            len => Err(CipherError::InvalidKeyLength { len }),
        }
    }
}

impl BlockCipher for AesBlockCipher {
    fn encrypt_block(&self, block: &mut Block) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(block),
            Self::Aes192(cipher) => cipher.encrypt_block(block),
            Self::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }
}

impl core::fmt::Debug for AesBlockCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Aes128(_) => "Aes128",
            Self::Aes192(_) => "Aes192",
            Self::Aes256(_) => "Aes256",
        };
        f.debug_tuple("AesBlockCipher").field(&name).finish()
    }
}
