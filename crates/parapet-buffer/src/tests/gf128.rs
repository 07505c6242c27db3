// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for GF(2^128) doubling and inverse.

use proptest::prelude::*;

use crate::gf128::{dbl, inv, mask_iv, one_block, zero_block};
use crate::word_buffer::WordBuffer;

fn block_from_hex(hex_str: &str) -> WordBuffer {
    WordBuffer::from_bytes(&hex::decode(hex_str).expect("Failed to hex::decode(..)"))
}

// =============================================================================
// dbl() known answers (RFC 4493 subkey derivation chain)
// =============================================================================

#[test]
fn test_dbl_without_reduction() {
    // L for the RFC 4493 sample key; its top bit is clear.
    let mut block = block_from_hex("7df76b0c1ab899b33e42f047b91b546f");
    dbl(&mut block);
    assert_eq!(block, block_from_hex("fbeed618357133667c85e08f7236a8de"));
}

#[test]
fn test_dbl_with_reduction() {
    // K1 for the RFC 4493 sample key; its top bit is set.
    let mut block = block_from_hex("fbeed618357133667c85e08f7236a8de");
    dbl(&mut block);
    assert_eq!(block, block_from_hex("f7ddac306ae266ccf90bc11ee46d513b"));
}

#[test]
fn test_dbl_of_zero_is_zero() {
    let mut block = zero_block();
    dbl(&mut block);
    assert_eq!(block, zero_block());
}

#[test]
fn test_dbl_of_one_is_two() {
    let mut block = one_block();
    dbl(&mut block);
    assert_eq!(block, WordBuffer::block([0, 0, 0, 2]));
}

// =============================================================================
// inv()
// =============================================================================

#[test]
fn test_inv_undoes_dbl_on_known_chain() {
    let mut block = block_from_hex("f7ddac306ae266ccf90bc11ee46d513b");
    inv(&mut block);
    assert_eq!(block, block_from_hex("fbeed618357133667c85e08f7236a8de"));
    inv(&mut block);
    assert_eq!(block, block_from_hex("7df76b0c1ab899b33e42f047b91b546f"));
}

#[test]
fn test_inv_of_odd_value_applies_reduction() {
    let mut block = one_block();
    inv(&mut block);
    assert_eq!(
        block,
        WordBuffer::block([0x8000_0000, 0, 0, 0x0000_0043])
    );
    // Halving then doubling must restore the original value.
    dbl(&mut block);
    assert_eq!(block, one_block());
}

// =============================================================================
// mask_iv()
// =============================================================================

#[test]
fn test_mask_iv_clears_top_bits_of_words_3_and_4() {
    let mut block = WordBuffer::block([0xffff_ffff; 4]);
    mask_iv(&mut block);
    assert_eq!(
        block,
        WordBuffer::block([0xffff_ffff, 0xffff_ffff, 0x7fff_ffff, 0x7fff_ffff])
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_inv_dbl_is_identity(bytes in proptest::collection::vec(any::<u8>(), 16)) {
        let original = WordBuffer::from_bytes(&bytes);
        let mut block = original.clone();
        dbl(&mut block);
        inv(&mut block);
        prop_assert_eq!(&block, &original);
    }

    #[test]
    fn prop_dbl_inv_is_identity(bytes in proptest::collection::vec(any::<u8>(), 16)) {
        let original = WordBuffer::from_bytes(&bytes);
        let mut block = original.clone();
        inv(&mut block);
        dbl(&mut block);
        prop_assert_eq!(&block, &original);
    }
}
