// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-eax.

use parapet_cipher::CipherError;
use thiserror::Error;

/// Errors from EAX operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum EaxError {
    /// An underlying cipher could not be constructed.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// The configured tag length is outside 1..=16 bytes.
    #[error("invalid tag length: {len} bytes (expected 1..=16)")]
    InvalidTagLength {
        /// The rejected tag length.
        len: usize,
    },

    /// Associated data can only be supplied before payload streaming
    /// starts.
    #[error("associated data cannot be added once payload streaming has started")]
    HeaderPhaseOver,

    /// `update`/`finalize` require a prior `init_crypt`.
    #[error("payload streaming has not been initialized")]
    StreamNotInitialized,

    /// `init_crypt` was called while a stream is already open.
    #[error("payload streaming is already initialized")]
    StreamAlreadyInitialized,

    /// Decryption input does not even hold a full tag.
    #[error("input too short: {len} bytes held back (need the {need}-byte tag)")]
    InputTooShort {
        /// Bytes actually held back.
        len: usize,
        /// The configured tag length.
        need: usize,
    },

    /// The recomputed tag does not match the received one.
    #[error("authentication failed")]
    AuthenticationFailed,
}
