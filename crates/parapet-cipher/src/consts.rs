// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block size constant and type alias.

/// Cipher block length: 128 bits (16 bytes).
pub const BLOCK_LEN: usize = 16;

/// One cipher block.
pub type Block = [u8; BLOCK_LEN];
