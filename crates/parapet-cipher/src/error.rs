// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-cipher.

use thiserror::Error;

/// Errors from cipher construction.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CipherError {
    /// The key is not one of the supported AES lengths (16, 24 or 32
    /// bytes).
    #[error("invalid key length: {len} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key.
        len: usize,
    },
}
