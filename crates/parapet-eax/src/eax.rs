// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EAX mode: `tag = OMAC(0 || nonce) XOR OMAC(1 || header) XOR
//! OMAC(2 || ciphertext)`, with the nonce MAC doubling as the CTR IV.

extern crate alloc;

use alloc::vec::Vec;

use parapet_buffer::{WordBuffer, gf128};
use parapet_cipher::{AesBlockCipher, AesCtr, BLOCK_LEN, Block, CipherError, KeystreamCipher};
use parapet_cmac::{Cmac, TAG_LEN, Tag};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::error::EaxError;

/// Construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EaxOptions {
    /// When true, the first half of the key MACs and the second half
    /// keys the counter-mode stream. When false (default) the whole
    /// key serves both roles.
    pub split_key: bool,
    /// Tag length in bytes, 1..=16 (default 16). The emitted and
    /// expected tag is the leftmost `tag_len` bytes of the 128-bit
    /// working MAC value.
    pub tag_len: usize,
}

impl Default for EaxOptions {
    fn default() -> Self {
        Self {
            split_key: false,
            tag_len: TAG_LEN,
        }
    }
}

/// Streaming phase of an EAX instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Collecting header fields; the MAC is pre-seeded with prefix
    /// block 1.
    Header,
    /// Streaming payload after `init_crypt`.
    Stream {
        /// Direction selected at `init_crypt`.
        encrypting: bool,
    },
}

/// EAX authenticated encryption instance.
///
/// One CMAC engine serves three domain-separated roles via prefix
/// blocks: nonce (0), header (1), ciphertext (2). After construction
/// and after every `finalize` the instance sits in the header phase,
/// ready for the next message under the same key.
pub struct Eax {
    mac: Cmac<AesBlockCipher>,
    ctr_key: Zeroizing<Vec<u8>>,
    tag_len: usize,
    phase: Phase,
    /// Running tag: header MAC, then XOR nonce MAC, then XOR
    /// ciphertext MAC.
    tag: WordBuffer,
    ctr: Option<AesCtr>,
    /// Decrypt-side hold-back: the trailing `tag_len` bytes of input
    /// seen so far are the candidate received tag, not ciphertext.
    buffer: WordBuffer,
}

impl Eax {
    /// Creates an instance. Key and tag-length validation happens
    /// here, not at first use.
    pub fn new(key: &[u8], options: EaxOptions) -> Result<Self, EaxError> {
        if options.tag_len == 0 || options.tag_len > TAG_LEN {
            return Err(EaxError::InvalidTagLength {
                len: options.tag_len,
            });
        }
        let (mac_key, ctr_key): (&[u8], &[u8]) = if options.split_key {
            let half = key.len() / 2;
            (&key[..half], &key[half..])
        } else {
            (key, key)
        };
        if !matches!(ctr_key.len(), 16 | 24 | 32) {
            return Err(CipherError::InvalidKeyLength { len: ctr_key.len() }.into());
        }

        let mut eax = Self {
            mac: Cmac::new(AesBlockCipher::new(mac_key)?),
            ctr_key: Zeroizing::new(ctr_key.to_vec()),
            tag_len: options.tag_len,
            phase: Phase::Header,
            tag: gf128::zero_block(),
            ctr: None,
            buffer: WordBuffer::new(),
        };
        eax.seed_header_phase();
        Ok(eax)
    }

    /// Feeds header (associated data) bytes. Multiple calls
    /// concatenate. Only legal before [`init_crypt`](Eax::init_crypt).
    pub fn update_aad(&mut self, header: &[u8]) -> Result<(), EaxError> {
        match self.phase {
            Phase::Header => {
                self.mac.update(header);
                Ok(())
            }
            Phase::Stream { .. } => Err(EaxError::HeaderPhaseOver),
        }
    }

    /// Closes the header phase and opens the payload stream.
    ///
    /// Finalizes the header MAC into the running tag, computes the
    /// nonce MAC (prefix 0) which both folds into the tag and
    /// initializes the counter-mode keystream, then re-seeds the MAC
    /// with prefix 2 for the ciphertext.
    pub fn init_crypt(&mut self, encrypting: bool, nonce: &[u8]) -> Result<(), EaxError> {
        if matches!(self.phase, Phase::Stream { .. }) {
            return Err(EaxError::StreamAlreadyInitialized);
        }

        let header_mac = self.mac.finalize(&[]);
        self.tag = WordBuffer::from_bytes(&header_mac);

        self.mac.update(&prefix_block(0));
        let nonce_mac: Tag = self.mac.finalize(nonce);
        xor_tag(&mut self.tag, &nonce_mac);

        self.ctr = Some(AesCtr::new(&self.ctr_key, &nonce_mac)?);

        self.mac.update(&prefix_block(2));
        self.phase = Phase::Stream { encrypting };
        self.buffer = WordBuffer::new();
        Ok(())
    }

    /// Streams one payload chunk, returning the processed bytes.
    ///
    /// Encrypting: the chunk is keystreamed and the *output*
    /// ciphertext is MACed. Decrypting: the trailing `tag_len` bytes
    /// seen so far are held back (they are the received tag); the
    /// part before them is MACed as ciphertext *input*, then
    /// keystreamed back to plaintext.
    pub fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>, EaxError> {
        let Phase::Stream { encrypting } = self.phase else {
            return Err(EaxError::StreamNotInitialized);
        };
        self.buffer.extend_from_bytes(chunk);

        let usable = if encrypting {
            self.buffer.len()
        } else {
            self.buffer.len().saturating_sub(self.tag_len)
        };
        let mut data = self.buffer.shift_bytes(usable).to_bytes();

        let ctr = self
            .ctr
            .as_mut()
            .expect("stream phase always holds a keystream");
        if encrypting {
            ctr.apply_keystream(&mut data);
            self.mac.update(&data);
        } else {
            self.mac.update(&data);
            ctr.apply_keystream(&mut data);
        }
        Ok(data)
    }

    /// Streams a last chunk, folds the ciphertext MAC into the tag and
    /// closes the message. Resets to the header phase for reuse.
    ///
    /// Encrypting: returns the remaining ciphertext with the truncated
    /// tag appended. Decrypting: verifies the held-back bytes against
    /// the recomputed tag in constant time and returns the remaining
    /// plaintext, or [`EaxError::AuthenticationFailed`] releasing
    /// nothing.
    pub fn finalize(&mut self, chunk: &[u8]) -> Result<Vec<u8>, EaxError> {
        let Phase::Stream { encrypting } = self.phase else {
            return Err(EaxError::StreamNotInitialized);
        };
        let mut out = self.update(chunk)?;

        let stream_mac = self.mac.finalize(&[]);
        xor_tag(&mut self.tag, &stream_mac);

        let result = if encrypting {
            let tag_bytes = self.tag.to_bytes();
            out.extend_from_slice(&tag_bytes[..self.tag_len]);
            Ok(out)
        } else {
            let received = core::mem::take(&mut self.buffer);
            if received.len() < self.tag_len {
                out.zeroize();
                Err(EaxError::InputTooShort {
                    len: received.len(),
                    need: self.tag_len,
                })
            } else {
                let expected = self.tag.to_bytes();
                if bool::from(expected[..self.tag_len].ct_eq(&received.to_bytes()[..])) {
                    Ok(out)
                } else {
                    out.zeroize();
                    Err(EaxError::AuthenticationFailed)
                }
            }
        };

        self.tag.zeroize();
        self.tag = gf128::zero_block();
        self.seed_header_phase();
        result
    }

    /// One-shot encryption: `header* → nonce → payload`, returning
    /// `ciphertext || tag`.
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        nonce: &[u8],
        ad: &[&[u8]],
    ) -> Result<Vec<u8>, EaxError> {
        for field in ad {
            self.update_aad(field)?;
        }
        self.init_crypt(true, nonce)?;
        self.finalize(plaintext)
    }

    /// One-shot decryption of `ciphertext || tag`.
    pub fn decrypt(
        &mut self,
        input: &[u8],
        nonce: &[u8],
        ad: &[&[u8]],
    ) -> Result<Vec<u8>, EaxError> {
        for field in ad {
            self.update_aad(field)?;
        }
        self.init_crypt(false, nonce)?;
        self.finalize(input)
    }

    /// Configured tag length in bytes.
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Re-enters the header phase and pre-seeds the MAC with prefix
    /// block 1.
    fn seed_header_phase(&mut self) {
        self.mac.update(&prefix_block(1));
        self.phase = Phase::Header;
        self.ctr = None;
        self.buffer.zeroize();
        self.buffer = WordBuffer::new();
    }
}

impl Drop for Eax {
    fn drop(&mut self) {
        self.tag.zeroize();
        self.buffer.zeroize();
    }
}

impl core::fmt::Debug for Eax {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Eax")
            .field("phase", &self.phase)
            .field("tag_len", &self.tag_len)
            .finish_non_exhaustive()
    }
}

/// Domain-separation block: fifteen zero bytes and the role index.
fn prefix_block(role: u8) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    block[BLOCK_LEN - 1] = role;
    block
}

fn xor_tag(acc: &mut WordBuffer, tag: &Tag) {
    acc.xor_assign(&WordBuffer::from_bytes(tag))
        .expect("running tag and MAC output are both one block");
}
