// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::Block;

/// Capability to encrypt one 16-byte block in place under a fixed key.
pub trait BlockCipher {
    /// Encrypts `block` in place.
    fn encrypt_block(&self, block: &mut Block);
}

/// Capability to XOR an arbitrary-length keystream into a byte stream.
///
/// Output length always equals input length; no padding is applied.
/// Applying the same keystream twice restores the original bytes, so a
/// single capability serves both encryption and decryption.
pub trait KeystreamCipher {
    /// XORs the next `data.len()` keystream bytes into `data`.
    fn apply_keystream(&mut self, data: &mut [u8]);
}
