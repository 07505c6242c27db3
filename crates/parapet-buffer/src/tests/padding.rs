// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for one-zero padding.

use crate::padding::one_zero_pad;
use crate::word_buffer::WordBuffer;

#[test]
fn test_pad_partial_block() {
    let mut buffer = WordBuffer::from_bytes(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee]);
    one_zero_pad(&mut buffer, 16);
    let mut expected = vec![0u8; 16];
    expected[..5].copy_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee]);
    expected[5] = 0x80;
    assert_eq!(buffer.to_bytes(), expected);
}

#[test]
fn test_pad_empty_buffer_fills_whole_block() {
    let mut buffer = WordBuffer::new();
    one_zero_pad(&mut buffer, 16);
    let mut expected = vec![0u8; 16];
    expected[0] = 0x80;
    assert_eq!(buffer.to_bytes(), expected);
}

#[test]
fn test_pad_aligned_buffer_appends_full_block() {
    let mut buffer = WordBuffer::from_bytes(&[1u8; 16]);
    one_zero_pad(&mut buffer, 16);
    assert_eq!(buffer.len(), 32);
    assert_eq!(buffer.byte_at(16), 0x80);
    assert_eq!(buffer.byte_at(31), 0x00);
}

#[test]
fn test_pad_one_byte_short_of_boundary() {
    let mut buffer = WordBuffer::from_bytes(&[7u8; 15]);
    one_zero_pad(&mut buffer, 16);
    assert_eq!(buffer.len(), 16);
    assert_eq!(buffer.byte_at(15), 0x80);
}
