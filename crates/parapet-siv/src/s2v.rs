// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! S2V vector hash per RFC 5297 Section 2.4.
//!
//! S2V authenticates an *ordered sequence* of byte fields: zero or more
//! associated-data fields chained through doubling, then one final
//! (plaintext) field. Moving bytes across field boundaries changes the
//! output even when the concatenation is unchanged.

use parapet_buffer::{WordBuffer, gf128, padding};
use parapet_cipher::{BLOCK_LEN, BlockCipher};
use parapet_cmac::{Cmac, Tag};
use zeroize::Zeroize;

use crate::error::SivError;

/// Streaming S2V engine.
///
/// Associated data must be complete before the final-field stream
/// starts: [`update_aad`](S2v::update_aad) after the first
/// [`update`](S2v::update) is a checked error.
pub struct S2v<C: BlockCipher> {
    cmac_ad: Cmac<C>,
    cmac_pt: Cmac<C>,
    /// Chaining value `D`, advanced by doubling per folded field.
    chain: WordBuffer,
    /// Final-field bytes not yet streamed into `cmac_pt`.
    buffer: WordBuffer,
    any_input: bool,
    pt_started: bool,
}

impl<C: BlockCipher + Clone> S2v<C> {
    /// Creates an engine holding two identically-keyed CMAC instances.
    pub fn new(cipher: C) -> Self {
        let mut s2v = Self {
            cmac_ad: Cmac::new(cipher.clone()),
            cmac_pt: Cmac::new(cipher),
            chain: WordBuffer::new(),
            buffer: WordBuffer::new(),
            any_input: false,
            pt_started: false,
        };
        s2v.reset();
        s2v
    }
}

impl<C: BlockCipher> S2v<C> {
    /// Returns to the post-construction baseline:
    /// `D = CMAC(0^128)`, no fields folded, final-field stream not
    /// started.
    pub fn reset(&mut self) {
        self.cmac_ad.reset();
        self.cmac_pt.reset();
        self.buffer.zeroize();
        self.buffer = WordBuffer::new();
        self.chain.zeroize();
        self.chain = tag_to_buffer(self.cmac_ad.finalize(&gf128::zero_block().to_bytes()));
        self.any_input = false;
        self.pt_started = false;
    }

    /// Folds one complete associated-data field:
    /// `D = dbl(D) XOR CMAC(field)`.
    ///
    /// Rejected once the final-field stream has started.
    pub fn update_aad(&mut self, field: &[u8]) -> Result<(), SivError> {
        if self.pt_started {
            return Err(SivError::AadAfterPlaintext);
        }
        gf128::dbl(&mut self.chain);
        xor_tag(&mut self.chain, &self.cmac_ad.finalize(field));
        self.any_input = true;
        Ok(())
    }

    /// Appends a chunk of the final field, permanently disabling
    /// further associated data.
    ///
    /// Leading blocks are streamed into the final-field CMAC as soon as
    /// two full blocks are buffered; at least one trailing block is
    /// always held back for [`finalize`](S2v::finalize).
    pub fn update(&mut self, chunk: &[u8]) {
        self.pt_started = true;
        self.buffer.extend_from_bytes(chunk);
        while self.buffer.len() >= 2 * BLOCK_LEN {
            self.any_input = true;
            let block = self.buffer.pop_words(BLOCK_LEN / 4);
            self.cmac_pt.update(&block.to_bytes());
        }
    }

    /// Consumes `chunk`, folds the held-back tail against `D` and
    /// produces the 128-bit vector hash. Resets the engine for reuse.
    pub fn finalize(&mut self, chunk: &[u8]) -> Tag {
        self.update(chunk);

        let tail = core::mem::take(&mut self.buffer);
        let tag = if !self.any_input && tail.is_empty() {
            // No fields at all: S2V() = CMAC(0^127 || 1).
            self.cmac_ad.finalize(&gf128::one_block().to_bytes())
        } else if tail.len() >= BLOCK_LEN {
            let folded = tail
                .xorend_bytes(&self.chain)
                .expect("held-back tail spans at least one block");
            self.cmac_pt.finalize(&folded.to_bytes())
        } else {
            let mut tail = tail;
            padding::one_zero_pad(&mut tail, BLOCK_LEN);
            gf128::dbl(&mut self.chain);
            self.chain
                .xor_assign(&tail)
                .expect("padded tail is one block");
            let folded = self.chain.to_bytes();
            self.cmac_pt.finalize(&folded)
        };

        self.reset();
        tag
    }
}

impl<C: BlockCipher> core::fmt::Debug for S2v<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("S2v")
            .field("pt_started", &self.pt_started)
            .field("buffered_bytes", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

fn tag_to_buffer(tag: Tag) -> WordBuffer {
    WordBuffer::from_bytes(&tag)
}

fn xor_tag(chain: &mut WordBuffer, tag: &Tag) {
    chain
        .xor_assign(&WordBuffer::from_bytes(tag))
        .expect("chaining value and tag are both one block");
}
