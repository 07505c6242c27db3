// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the AES block-cipher adapter (FIPS 197 Appendix C).

use crate::aes::AesBlockCipher;
use crate::consts::Block;
use crate::error::CipherError;
use crate::traits::BlockCipher;

fn fips197_block() -> Block {
    let mut block = [0u8; 16];
    block.copy_from_slice(&hex::decode("00112233445566778899aabbccddeeff").unwrap());
    block
}

// =============================================================================
// Known answers
// =============================================================================

#[test]
fn test_aes128_fips197_vector() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let cipher = AesBlockCipher::new(&key).expect("Failed to new(..)");
    let mut block = fips197_block();
    cipher.encrypt_block(&mut block);
    assert_eq!(hex::encode(block), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn test_aes192_fips197_vector() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let cipher = AesBlockCipher::new(&key).expect("Failed to new(..)");
    let mut block = fips197_block();
    cipher.encrypt_block(&mut block);
    assert_eq!(hex::encode(block), "dda97ca4864cdfe06eaf70a0ec0d7191");
}

#[test]
fn test_aes256_fips197_vector() {
    let key =
        hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();
    let cipher = AesBlockCipher::new(&key).expect("Failed to new(..)");
    let mut block = fips197_block();
    cipher.encrypt_block(&mut block);
    assert_eq!(hex::encode(block), "8ea2b7ca516745bfeafc49904b496089");
}

// =============================================================================
// Key validation
// =============================================================================

#[test]
fn test_new_rejects_unsupported_key_lengths() {
    for len in [0usize, 1, 15, 17, 23, 25, 31, 33, 64] {
        let key = vec![0u8; len];
        assert_eq!(
            AesBlockCipher::new(&key).err(),
            Some(CipherError::InvalidKeyLength { len })
        );
    }
}
