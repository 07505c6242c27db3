// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SIV deterministic AEAD per RFC 5297 Section 2.6/2.7.

extern crate alloc;

use alloc::vec::Vec;

use parapet_buffer::{WordBuffer, gf128};
use parapet_cipher::{AesBlockCipher, AesCtr, BLOCK_LEN, Block, KeystreamCipher};
use parapet_cmac::{TAG_LEN, Tag};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::SivError;
use crate::s2v::S2v;

/// SIV deterministic authenticated encryption.
///
/// Key material is double cipher-key length and is split positionally:
/// the first half keys S2V/CMAC, the second half keys the counter-mode
/// stream. Callers supply key material already sized as required; no
/// key stretching happens here.
pub struct Siv {
    mac_key: Zeroizing<Vec<u8>>,
    ctr_key: Zeroizing<Vec<u8>>,
}

impl Siv {
    /// Creates an instance from 32-, 48- or 64-byte key material.
    pub fn new(key: &[u8]) -> Result<Self, SivError> {
        if !matches!(key.len(), 32 | 48 | 64) {
            return Err(SivError::InvalidKeyLength { len: key.len() });
        }
        let half = key.len() / 2;
        Ok(Self {
            mac_key: Zeroizing::new(key[..half].to_vec()),
            ctr_key: Zeroizing::new(key[half..].to_vec()),
        })
    }

    /// Encrypts `plaintext` bound to the ordered `ad` fields.
    ///
    /// Returns `tag(16) || ciphertext`. Deterministic: identical
    /// inputs always produce identical output. Nonce-based use passes
    /// the nonce as the last `ad` field.
    pub fn encrypt(&self, ad: &[&[u8]], plaintext: &[u8]) -> Result<Vec<u8>, SivError> {
        let tag = self.vector_hash(ad, plaintext)?;

        let mut ciphertext = plaintext.to_vec();
        self.keystream(&tag)?.apply_keystream(&mut ciphertext);

        let mut out = Vec::with_capacity(TAG_LEN + ciphertext.len());
        out.extend_from_slice(&tag);
        out.append(&mut ciphertext);
        Ok(out)
    }

    /// Splits `input` into `tag || ciphertext`, decrypts, and releases
    /// the plaintext only if the recomputed tag matches the received
    /// one.
    pub fn decrypt(&self, ad: &[&[u8]], input: &[u8]) -> Result<Vec<u8>, SivError> {
        if input.len() < TAG_LEN {
            return Err(SivError::InputTooShort { len: input.len() });
        }
        let (tag_bytes, ciphertext) = input.split_at(TAG_LEN);
        let mut received: Tag = [0u8; TAG_LEN];
        received.copy_from_slice(tag_bytes);

        let mut plaintext = Zeroizing::new(ciphertext.to_vec());
        self.keystream(&received)?
            .apply_keystream(plaintext.as_mut_slice());

        let expected = self.vector_hash(ad, plaintext.as_slice())?;
        if bool::from(expected[..].ct_eq(&received[..])) {
            Ok(plaintext.to_vec())
        } else {
            // The candidate buffer is wiped when `plaintext` drops.
            Err(SivError::AuthenticationFailed)
        }
    }

    fn vector_hash(&self, ad: &[&[u8]], plaintext: &[u8]) -> Result<Tag, SivError> {
        let mut s2v = S2v::new(AesBlockCipher::new(&self.mac_key)?);
        for field in ad {
            s2v.update_aad(field)?;
        }
        Ok(s2v.finalize(plaintext))
    }

    /// Counter-mode stream keyed with the second key half; the IV is
    /// the tag with the most significant bit of its 3rd and 4th words
    /// cleared, keeping it stable across counter-increment conventions.
    fn keystream(&self, tag: &Tag) -> Result<AesCtr, SivError> {
        let mut iv = WordBuffer::from_bytes(tag);
        gf128::mask_iv(&mut iv);
        let mut iv_block: Block = [0u8; BLOCK_LEN];
        iv_block.copy_from_slice(&iv.to_bytes());
        Ok(AesCtr::new(&self.ctr_key, &iv_block)?)
    }
}

impl core::fmt::Debug for Siv {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Siv")
            .field("key_len", &(self.mac_key.len() + self.ctr_key.len()))
            .finish_non_exhaustive()
    }
}
