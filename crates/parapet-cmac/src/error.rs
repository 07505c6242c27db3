// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-cmac.

use parapet_cipher::CipherError;
use thiserror::Error;

/// Errors from CMAC construction.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CmacError {
    /// The MAC key is not a supported cipher key length.
    #[error(transparent)]
    Cipher(#[from] CipherError),
}
