// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CMAC engine with OMAC1/OMAC2 subkey derivation.

use parapet_buffer::{WordBuffer, gf128, padding};
use parapet_cipher::{AesBlockCipher, BLOCK_LEN, BlockCipher};
use zeroize::Zeroize;

use crate::error::CmacError;

/// MAC tag length: 128 bits (16 bytes).
pub const TAG_LEN: usize = BLOCK_LEN;

/// 128-bit MAC tag.
pub type Tag = [u8; TAG_LEN];

/// Subkey-derivation variant.
///
/// Both variants derive `K1 = dbl(E_K(0^128))`; they differ in the
/// subkey applied to padded final blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacVariant {
    /// `K2 = dbl(K1)` — CMAC as standardized.
    #[default]
    Omac1,
    /// `K2 = inv(E_K(0^128))`.
    Omac2,
}

/// Streaming CMAC engine over a block cipher.
///
/// Lifecycle: `Reset → [update]* → finalize → Reset`. Subkeys are
/// derived once at construction; [`finalize`](Cmac::finalize) resets
/// message state back to the post-construction baseline, so an
/// instance is immediately reusable under the same key.
///
/// Not meant for concurrent use: `update`/`finalize` mutate the
/// running chaining value and the held-back buffer, so each message
/// stream must own its own instance.
pub struct Cmac<C: BlockCipher> {
    cipher: C,
    k1: WordBuffer,
    k2: WordBuffer,
    chaining: WordBuffer,
    buffer: WordBuffer,
    blocks_processed: u64,
}

impl<C: BlockCipher> Cmac<C> {
    /// Creates a standard (OMAC1) instance.
    pub fn new(cipher: C) -> Self {
        Self::with_variant(cipher, MacVariant::Omac1)
    }

    /// Creates an instance with an explicit subkey variant.
    pub fn with_variant(cipher: C, variant: MacVariant) -> Self {
        let mut l = gf128::zero_block();
        encrypt_in_place(&cipher, &mut l);

        let mut k1 = l.clone();
        gf128::dbl(&mut k1);

        let k2 = match variant {
            MacVariant::Omac1 => {
                let mut k2 = k1.clone();
                gf128::dbl(&mut k2);
                k2
            }
            MacVariant::Omac2 => {
                let mut k2 = l.clone();
                gf128::inv(&mut k2);
                k2
            }
        };
        l.zeroize();

        Self {
            cipher,
            k1,
            k2,
            chaining: gf128::zero_block(),
            buffer: WordBuffer::new(),
            blocks_processed: 0,
        }
    }

    /// Appends `data` to the running computation.
    ///
    /// Leading blocks are absorbed as soon as strictly more than one
    /// block is buffered. The trailing block is always held back: its
    /// treatment (full vs padded) is only known at finalization.
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_bytes(data);
        while self.buffer.len() > BLOCK_LEN {
            let block = self.buffer.shift_bytes(BLOCK_LEN);
            xor_blocks(&mut self.chaining, &block);
            encrypt_in_place(&self.cipher, &mut self.chaining);
            self.blocks_processed += 1;
        }
    }

    /// Absorbs `data`, folds in the held-back final block and produces
    /// the tag. Resets the instance for reuse.
    ///
    /// A full final block is XORed with `K1`; a partial (or absent)
    /// one is one-zero padded and XORed with `K2`.
    pub fn finalize(&mut self, data: &[u8]) -> Tag {
        self.update(data);

        let mut last = core::mem::take(&mut self.buffer);
        if last.len() == BLOCK_LEN {
            xor_blocks(&mut last, &self.k1);
        } else {
            padding::one_zero_pad(&mut last, BLOCK_LEN);
            xor_blocks(&mut last, &self.k2);
        }
        xor_blocks(&mut last, &self.chaining);
        encrypt_in_place(&self.cipher, &mut last);

        self.reset();

        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&last.to_bytes());
        last.zeroize();
        tag
    }

    /// Clears message state back to the post-construction baseline,
    /// retaining the subkeys.
    pub fn reset(&mut self) {
        self.chaining.zeroize();
        self.chaining = gf128::zero_block();
        self.buffer.zeroize();
        self.buffer = WordBuffer::new();
        self.blocks_processed = 0;
    }

    /// Full blocks absorbed since the last reset.
    pub fn blocks_processed(&self) -> u64 {
        self.blocks_processed
    }
}

impl Cmac<AesBlockCipher> {
    /// Creates a standard AES-CMAC instance for a 16-, 24- or 32-byte
    /// key. A key of any other length fails here, at construction.
    pub fn aes(key: &[u8]) -> Result<Self, CmacError> {
        Ok(Self::new(AesBlockCipher::new(key)?))
    }

    /// AES-keyed instance with an explicit subkey variant.
    pub fn aes_with_variant(key: &[u8], variant: MacVariant) -> Result<Self, CmacError> {
        Ok(Self::with_variant(AesBlockCipher::new(key)?, variant))
    }
}

impl<C: BlockCipher> Drop for Cmac<C> {
    fn drop(&mut self) {
        self.k1.zeroize();
        self.k2.zeroize();
        self.chaining.zeroize();
        self.buffer.zeroize();
    }
}

impl<C: BlockCipher> core::fmt::Debug for Cmac<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cmac")
            .field("blocks_processed", &self.blocks_processed)
            .field("buffered_bytes", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

/// One-shot MAC over a complete message.
pub fn mac<C: BlockCipher>(cipher: C, message: &[u8]) -> Tag {
    Cmac::new(cipher).finalize(message)
}

/// One-shot AES-CMAC over a complete message.
pub fn aes_cmac(key: &[u8], message: &[u8]) -> Result<Tag, CmacError> {
    Ok(Cmac::aes(key)?.finalize(message))
}

fn encrypt_in_place<C: BlockCipher>(cipher: &C, buffer: &mut WordBuffer) {
    let mut block = [0u8; BLOCK_LEN];
    block.copy_from_slice(&buffer.to_bytes());
    cipher.encrypt_block(&mut block);
    buffer.zeroize();
    *buffer = WordBuffer::from_bytes(&block);
    block.zeroize();
}

fn xor_blocks(acc: &mut WordBuffer, block: &WordBuffer) {
    acc.xor_assign(block)
        .expect("operands are both one cipher block");
}
