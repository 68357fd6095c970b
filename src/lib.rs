//! [AES-GCM-SIV][1] ([RFC 8452][2]): nonce-misuse-resistant
//! [Authenticated Encryption with Associated Data (AEAD)][3] cipher, built
//! from scratch on top of the GF(2^128) field arithmetic and POLYVAL
//! universal hash the construction is defined in terms of, rather than on
//! an external POLYVAL/CTR implementation.
//!
//! [1]: https://en.wikipedia.org/wiki/AES-GCM-SIV
//! [2]: https://tools.ietf.org/html/rfc8452
//! [3]: https://en.wikipedia.org/wiki/Authenticated_encryption
//!
//! Two APIs are exposed:
//!
//! - [`AesGcmSiv`] (and the [`Aes128GcmSiv`]/[`Aes256GcmSiv`] aliases)
//!   implements the [`aead::Aead`] trait so it drops into code already
//!   written against the RustCrypto AEAD ecosystem. On failure it only
//!   returns the trait's opaque [`aead::Error`].
//! - [`Cipher`] is the lower-level, per-(key, nonce) context, constructed
//!   via [`aead_new`]. It returns the granular [`Error`] taxonomy (bad key
//!   size, bad nonce size, oversized input, or authentication failure) so
//!   callers that aren't bound by the `aead` trait's contract can tell
//!   those apart.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use aead;

mod cipher;
mod ctr;
mod error;
mod field;
mod kdf;
mod polyval;

pub use crate::cipher::Cipher;
pub use crate::error::{Error, Result};

use aead::generic_array::{
    typenum::{Unsigned, U0, U12, U16, U8},
    GenericArray,
};
use aead::{Aead, NewAead, Payload};
use aes::{Aes128, Aes256};
use alloc::vec::Vec;
use cipher::BlockCipher as _BlockCipher;

/// Maximum length of associated data, in bytes (RFC 8452 Section 6).
pub const A_MAX: u64 = 1 << 36;

/// Maximum length of plaintext, in bytes (RFC 8452 Section 6).
pub const P_MAX: u64 = 1 << 36;

/// Maximum length of ciphertext (including the tag), in bytes (RFC 8452
/// Section 6).
pub const C_MAX: u64 = (1 << 36) + 16;

/// AES-GCM-SIV with a 128-bit key.
pub type Aes128GcmSiv = AesGcmSiv<Aes128>;

/// AES-GCM-SIV with a 256-bit key.
pub type Aes256GcmSiv = AesGcmSiv<Aes256>;

/// AES-GCM-SIV: Misuse-Resistant Authenticated Encryption Cipher (RFC 8452).
///
/// Holds only the long-term key-generating key; each `encrypt`/`decrypt`
/// call derives a fresh per-nonce [`Cipher`] and discards it afterwards,
/// matching the construction's "no reset, new nonce means new context"
/// state machine.
#[derive(Clone)]
pub struct AesGcmSiv<C: _BlockCipher<BlockSize = U16, ParBlocks = U8>> {
    key: GenericArray<u8, C::KeySize>,
}

impl<C> NewAead for AesGcmSiv<C>
where
    C: _BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    type KeySize = C::KeySize;

    fn new(key: GenericArray<u8, C::KeySize>) -> Self {
        Self { key }
    }
}

impl<C> Aead for AesGcmSiv<C>
where
    C: _BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    type NonceSize = U12;
    type TagSize = U16;
    type CiphertextOverhead = U0;

    fn encrypt<'msg, 'aad>(
        &self,
        nonce: &GenericArray<u8, Self::NonceSize>,
        plaintext: impl Into<Payload<'msg, 'aad>>,
    ) -> core::result::Result<Vec<u8>, aead::Error> {
        let payload = plaintext.into();
        Cipher::<C>::new(&self.key, nonce)
            .encrypt(payload.msg, payload.aad)
            .map_err(Into::into)
    }

    fn decrypt<'msg, 'aad>(
        &self,
        nonce: &GenericArray<u8, Self::NonceSize>,
        ciphertext: impl Into<Payload<'msg, 'aad>>,
    ) -> core::result::Result<Vec<u8>, aead::Error> {
        let payload = ciphertext.into();
        Cipher::<C>::new(&self.key, nonce)
            .decrypt(payload.msg, payload.aad)
            .map_err(Into::into)
    }
}

/// Construct a [`Cipher`] context from raw key and nonce bytes, validating
/// their lengths up front before any key derivation runs.
///
/// `key` must be 16 or 32 bytes (matching `C`'s key size) and `nonce`
/// exactly 12 bytes; both are checked before any key derivation runs.
pub fn aead_new<C>(key: &[u8], nonce: &[u8]) -> Result<Cipher<C>>
where
    C: _BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    if key.len() != C::KeySize::to_usize() {
        return Err(Error::InvalidKeySize);
    }
    if nonce.len() != 12 {
        return Err(Error::InvalidNonceSize);
    }

    let key = GenericArray::<u8, C::KeySize>::clone_from_slice(key);
    let nonce = GenericArray::<u8, U12>::clone_from_slice(nonce);
    Ok(Cipher::new(&key, &nonce))
}
