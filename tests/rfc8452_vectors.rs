//! End-to-end RFC 8452 test vectors and the construction's universal
//! properties: roundtrip, tamper-detection, and misuse-resistant
//! determinism.

use aes::{Aes128, Aes256};
use aes_siv_core::{aead_new, Error};
use hex_literal::hex;

fn encrypt128(key: [u8; 16], nonce: [u8; 12], pt: &[u8], ad: &[u8]) -> Vec<u8> {
    aead_new::<Aes128>(&key, &nonce).unwrap().encrypt(pt, ad).unwrap()
}

fn encrypt256(key: [u8; 32], nonce: [u8; 12], pt: &[u8], ad: &[u8]) -> Vec<u8> {
    aead_new::<Aes256>(&key, &nonce).unwrap().encrypt(pt, ad).unwrap()
}

#[test]
fn vector_1_aes128_empty_pt_and_ad() {
    let key = hex!("01000000000000000000000000000000");
    let nonce = hex!("030000000000000000000000");

    let out = encrypt128(key, nonce, b"", b"");
    assert_eq!(out, hex!("dc20e2d83f25705bb49e439eca56de25"));
}

#[test]
fn vector_2_aes128_8_byte_pt() {
    let key = hex!("01000000000000000000000000000000");
    let nonce = hex!("030000000000000000000000");
    let pt = hex!("0100000000000000");

    let out = encrypt128(key, nonce, &pt, b"");
    assert_eq!(out, hex!("b5d839330ac7b786578782fff6013b815b287c22493a364c"));
}

#[test]
fn vector_3_aes128_12_byte_pt() {
    let key = hex!("01000000000000000000000000000000");
    let nonce = hex!("030000000000000000000000");
    let pt = hex!("010000000000000000000000");

    let out = encrypt128(key, nonce, &pt, b"");
    assert_eq!(out, hex!("7323ea61d05932260047d942a4978db357391a0bc4fdec8b0d106639"));
}

#[test]
fn vector_4_aes256_with_ad() {
    let key = hex!("d1894728b3fed1473c528b8426a582995929a1499e9ad8780c8d63d0ab4149c0");
    let nonce = hex!("9f572c614b4745914474e7c7");
    let pt = hex!("c9882e5386fd9f92ec");
    let ad = hex!("489c8fde2be2cf97e74e932d4ed87d");

    let out = encrypt256(key, nonce, &pt, &ad);
    assert_eq!(out, hex!("0df9e308678244c44bc0fd3dc6628dfe55ebb0b9fb2295c8c2"));
}

#[test]
fn vector_5_aes256_counter_wrap() {
    let key = [0u8; 32];
    let nonce = [0u8; 12];
    let pt = hex!("000000000000000000000000000000004db923dc793ee6497c76dcc03a98e108");

    let out = encrypt256(key, nonce, &pt, b"");
    assert_eq!(
        out,
        hex!(
            "f3f80f2cf0cb2dd9c5984fcda908456cc537703b5ba70324a6793a7bf218d3eaff
             ffffff000000000000000000000000"
        )
    );
}

#[test]
fn decrypt_inverts_encrypt() {
    let key = [0x42u8; 16];
    let nonce = [0x24u8; 12];
    let pt = b"the quick brown fox jumps over the lazy dog";
    let ad = b"associated";

    let ct = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .encrypt(pt, ad)
        .unwrap();
    let recovered = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .decrypt(&ct, ad)
        .unwrap();
    assert_eq!(&recovered[..], &pt[..]);
}

#[test]
fn bit_flip_in_ciphertext_fails_authentication() {
    let key = [0x11u8; 16];
    let nonce = [0x22u8; 12];
    let pt = b"authenticate me";
    let ad = b"";

    let mut ct = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .encrypt(pt, ad)
        .unwrap();
    ct[0] ^= 0x01;

    let err = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .decrypt(&ct, ad)
        .unwrap_err();
    assert_eq!(err, Error::AuthenticationFailure);
}

#[test]
fn bit_flip_in_tag_fails_authentication() {
    let key = [0x11u8; 16];
    let nonce = [0x22u8; 12];
    let pt = b"authenticate me";
    let ad = b"";

    let mut ct = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .encrypt(pt, ad)
        .unwrap();
    let last = ct.len() - 1;
    ct[last] ^= 0x01;

    let err = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .decrypt(&ct, ad)
        .unwrap_err();
    assert_eq!(err, Error::AuthenticationFailure);
}

#[test]
fn bit_flip_in_associated_data_fails_authentication() {
    let key = [0x11u8; 16];
    let nonce = [0x22u8; 12];
    let pt = b"authenticate me";
    let ad = b"context";

    let ct = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .encrypt(pt, ad)
        .unwrap();

    let mut bad_ad = ad.to_vec();
    bad_ad[0] ^= 0x01;

    let err = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .decrypt(&ct, &bad_ad)
        .unwrap_err();
    assert_eq!(err, Error::AuthenticationFailure);
}

#[test]
fn equal_inputs_yield_equal_outputs() {
    let key = [0x99u8; 16];
    let nonce = [0x55u8; 12];
    let pt = b"misuse resistance";
    let ad = b"same every time";

    let a = aead_new::<Aes128>(&key, &nonce).unwrap().encrypt(pt, ad).unwrap();
    let b = aead_new::<Aes128>(&key, &nonce).unwrap().encrypt(pt, ad).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_bad_key_and_nonce_sizes() {
    assert_eq!(
        aead_new::<Aes128>(&[0u8; 24], &[0u8; 12]).unwrap_err(),
        Error::InvalidKeySize
    );
    assert_eq!(
        aead_new::<Aes128>(&[0u8; 16], &[0u8; 13]).unwrap_err(),
        Error::InvalidNonceSize
    );
}

#[test]
fn rejects_undersized_ciphertext_on_decrypt() {
    let key = [0u8; 16];
    let nonce = [0u8; 12];
    let err = aead_new::<Aes128>(&key, &nonce)
        .unwrap()
        .decrypt(&[0u8; 8], b"")
        .unwrap_err();
    assert_eq!(err, Error::InvalidInputSize);
}
