// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-siv.

use parapet_cipher::CipherError;
use thiserror::Error;

/// Errors from S2V and SIV operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SivError {
    /// An underlying cipher could not be constructed.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// SIV key material must be double cipher-key length.
    #[error("invalid SIV key length: {len} bytes (expected 32, 48 or 64)")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },

    /// Associated data can only be supplied before the final-field
    /// stream starts.
    #[error("associated data cannot be added after the plaintext stream has started")]
    AadAfterPlaintext,

    /// Decryption input does not even hold a full tag.
    #[error("input too short: {len} bytes (need at least the 16-byte tag)")]
    InputTooShort {
        /// Length of the rejected input.
        len: usize,
    },

    /// The recomputed tag does not match the received one. No
    /// plaintext is released.
    #[error("authentication failed")]
    AuthenticationFailed,
}
