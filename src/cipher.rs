//! The SIV composition: the per-(key, nonce) authenticated-encryption
//! context.
//!
//! This is the crate's `AEADContext` (RFC 8452's "key derivation + SIV"):
//! immutable once constructed, consumed by `encrypt`/`decrypt` so a fresh
//! nonce always means a fresh `Cipher`. [`crate::AesGcmSiv`] wraps this to
//! present the `aead::Aead` trait to the wider RustCrypto ecosystem, but
//! `Cipher` is itself a complete, lower-level API with the granular error
//! taxonomy in [`crate::error`].

use crate::error::{Error, Result};
use crate::kdf;
use crate::polyval::Polyval;
use crate::{A_MAX, C_MAX, P_MAX};
use aead::generic_array::{
    typenum::{U12, U16, U8},
    GenericArray,
};
use alloc::vec::Vec;
use cipher::BlockCipher;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A 16-byte authentication tag, also used to seed the counter block.
pub(crate) type Tag = GenericArray<u8, U16>;

/// AES-GCM-SIV, bound to one key-generating key and one nonce.
///
/// Constructing a `Cipher` runs key derivation once; `encrypt` and
/// `decrypt` each consume it, so reusing it for a second nonce is a type
/// error rather than a runtime footgun.
pub struct Cipher<C: BlockCipher<BlockSize = U16, ParBlocks = U8>> {
    enc_cipher: C,
    auth_key: [u8; 16],
    nonce: GenericArray<u8, U12>,
}

impl<C> Cipher<C>
where
    C: BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    /// Derive the per-nonce authentication and encryption keys from
    /// `key_generating_key` and `nonce`.
    pub fn new(
        key_generating_key: &GenericArray<u8, C::KeySize>,
        nonce: &GenericArray<u8, U12>,
    ) -> Self {
        let kgk_cipher = C::new(key_generating_key);
        let (mut auth_key, mut enc_key) = kdf::derive_keys(&kgk_cipher, nonce);

        let mut auth_key_bytes = [0u8; 16];
        auth_key_bytes.copy_from_slice(auth_key.as_slice());
        auth_key.as_mut_slice().zeroize();

        let enc_cipher = C::new(&enc_key);
        enc_key.as_mut_slice().zeroize();

        Cipher {
            enc_cipher,
            auth_key: auth_key_bytes,
            nonce: nonce.clone(),
        }
    }

    /// Encrypt `plaintext` under `associated_data`, returning
    /// `ciphertext ‖ tag`.
    pub fn encrypt(self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        if plaintext.len() as u64 > P_MAX || associated_data.len() as u64 > A_MAX {
            return Err(Error::InvalidInputSize);
        }

        let mut buffer = Vec::with_capacity(plaintext.len() + 16);
        buffer.extend_from_slice(plaintext);

        let tag = self.compute_tag(&buffer, associated_data);
        let mut counter_block = tag.clone();
        counter_block[15] |= 0x80;
        crate::ctr::apply_keystream(&self.enc_cipher, counter_block, &mut buffer);

        buffer.extend_from_slice(tag.as_slice());
        Ok(buffer)
    }

    /// Split the trailing tag off `ciphertext_with_tag`, recover the
    /// plaintext, and verify it in constant time before returning it.
    pub fn decrypt(self, ciphertext_with_tag: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        if ciphertext_with_tag.len() < 16
            || ciphertext_with_tag.len() as u64 > C_MAX
            || associated_data.len() as u64 > A_MAX
        {
            return Err(Error::InvalidInputSize);
        }

        let tag_start = ciphertext_with_tag.len() - 16;
        let mut buffer = ciphertext_with_tag[..tag_start].to_vec();
        let received_tag = Tag::clone_from_slice(&ciphertext_with_tag[tag_start..]);

        let mut counter_block = received_tag.clone();
        counter_block[15] |= 0x80;
        crate::ctr::apply_keystream(&self.enc_cipher, counter_block, &mut buffer);

        let expected_tag = self.compute_tag(&buffer, associated_data);

        if expected_tag.ct_eq(&received_tag).unwrap_u8() == 1 {
            Ok(buffer)
        } else {
            buffer.zeroize();
            Err(Error::AuthenticationFailure)
        }
    }

    /// POLYVAL the padded associated data, padded message and length
    /// block, mask with the nonce, clear the top bit, then encrypt the
    /// result to produce the tag (RFC 8452 Section 4).
    fn compute_tag(&self, buffer: &[u8], associated_data: &[u8]) -> Tag {
        let mut polyval = Polyval::new(&self.auth_key);
        polyval.update_padded(associated_data);
        polyval.update_padded(buffer);

        let associated_data_len = (associated_data.len() as u64) * 8;
        let buffer_len = (buffer.len() as u64) * 8;
        let mut len_block = [0u8; 16];
        len_block[..8].copy_from_slice(&associated_data_len.to_le_bytes());
        len_block[8..].copy_from_slice(&buffer_len.to_le_bytes());
        polyval.update_block(&len_block);

        let mut s = polyval.finish();
        for (i, byte) in s[..12].iter_mut().enumerate() {
            *byte ^= self.nonce[i];
        }
        s[15] &= 0x7f;

        let mut tag = Tag::clone_from_slice(&s);
        s.zeroize();
        self.enc_cipher.encrypt_block(&mut tag);
        tag
    }
}

impl<C> Drop for Cipher<C>
where
    C: BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    fn drop(&mut self) {
        self.auth_key.zeroize();
    }
}
