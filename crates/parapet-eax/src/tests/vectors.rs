// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EAX known-answer tests (test vectors from the EAX paper,
//! Bellare–Rogaway–Wagner, AES-128).

use crate::eax::{Eax, EaxOptions};

struct TestCase {
    key: &'static str,
    nonce: &'static str,
    header: &'static str,
    message: &'static str,
    /// `ciphertext || tag` (hex).
    cipher: &'static str,
}

const CASES: &[TestCase] = &[
    TestCase {
        key: "233952dee4d5ed5f9b9c6d6ff80ff478",
        nonce: "62ec67f9c3a4a407fcb2a8c49031a8b3",
        header: "6bfb914fd07eae6b",
        message: "",
        cipher: "e037830e8389f27b025a2d6527e79d01",
    },
    TestCase {
        key: "91945d3f4dcbee0bf45ef52255f095a4",
        nonce: "becaf043b0a23d843194ba972c66debd",
        header: "fa3bfd4806eb53fa",
        message: "f7fb",
        cipher: "19dd5c4c9331049d0bdab0277408f67967e5",
    },
    TestCase {
        key: "01f74ad64077f2e704c0f60ada3dd523",
        nonce: "70c3db4f0d26368400a10ed05d2bff5e",
        header: "234a3463c1264ac6",
        message: "1a47cb4933",
        cipher: "d851d5bae03a59f238a23e39199dc9266626c40f80",
    },
    TestCase {
        key: "8395fcf1e95bebd697bd010bc766aac3",
        nonce: "22e7add93cfc6393c57ec0b3c17d6b44",
        header: "126735fcc320d25a",
        message: "ca40d7446e545ffaed3bd12a740a659ffbbb3ceab7",
        cipher: "cb8920f87a6c75cff39627b56e3ed197c552d295a7cfc46afc253b4652b1af3795b124ab6e",
    },
];

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("Failed to hex::decode(..)")
}

#[test]
fn test_paper_vectors_encrypt() {
    for (index, case) in CASES.iter().enumerate() {
        let mut eax =
            Eax::new(&decode(case.key), EaxOptions::default()).expect("Failed to new(..)");
        let sealed = eax
            .encrypt(&decode(case.message), &decode(case.nonce), &[&decode(case.header)])
            .expect("Failed to encrypt(..)");
        assert_eq!(hex::encode(sealed), case.cipher, "vector {}", index);
    }
}

#[test]
fn test_paper_vectors_decrypt() {
    for (index, case) in CASES.iter().enumerate() {
        let mut eax =
            Eax::new(&decode(case.key), EaxOptions::default()).expect("Failed to new(..)");
        let opened = eax
            .decrypt(&decode(case.cipher), &decode(case.nonce), &[&decode(case.header)])
            .expect("Failed to decrypt(..)");
        assert_eq!(hex::encode(opened), case.message, "vector {}", index);
    }
}

#[test]
fn test_paper_vectors_reuse_one_instance() {
    // Same-keyed reuse is only valid per key; re-key per case but reuse
    // the instance across encrypt and decrypt of the same message.
    for case in CASES {
        let mut eax =
            Eax::new(&decode(case.key), EaxOptions::default()).expect("Failed to new(..)");
        let sealed = eax
            .encrypt(&decode(case.message), &decode(case.nonce), &[&decode(case.header)])
            .expect("Failed to encrypt(..)");
        let opened = eax
            .decrypt(&sealed, &decode(case.nonce), &[&decode(case.header)])
            .expect("Failed to decrypt(..)");
        assert_eq!(hex::encode(opened), case.message);
    }
}
