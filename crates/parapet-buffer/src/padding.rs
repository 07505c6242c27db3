// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-zero padding: a single `1` bit followed by `0` bits up to the
//! next block boundary, at byte granularity (`0x80 0x00 ... 0x00`).

extern crate alloc;

use alloc::vec;

use crate::word_buffer::WordBuffer;

/// Pads `buffer` up to the next multiple of `block_len` bytes.
///
/// A buffer already on a block boundary (including an empty one)
/// receives a full block of padding.
pub fn one_zero_pad(buffer: &mut WordBuffer, block_len: usize) {
    debug_assert!(block_len > 0);
    let pad = block_len - buffer.len() % block_len;
    let mut padding = vec![0u8; pad];
    padding[0] = 0x80;
    buffer.extend_from_bytes(&padding);
}
