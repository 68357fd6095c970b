//! Per-nonce key derivation (RFC 8452 Section 4).
//!
//! Turns the long-term key-generating key into a 128-bit message
//! authentication key and a message-encryption key matching the
//! key-generating key's size, by encrypting a handful of counter-prefixed
//! blocks under the key-generating key and keeping the low 8 bytes of
//! each.

use aead::generic_array::{
    typenum::{U12, U16, U8},
    GenericArray,
};
use cipher::BlockCipher;

/// Derive `(auth_key, enc_key)` from an already-keyed `key_generating_key`
/// cipher instance and a 12-byte nonce.
///
/// The counter prefix is 4 bytes, little-endian, starting at 0; only the
/// low 8 bytes of each AES output are retained. Four blocks are needed for
/// a 128-bit key-generating key (counters 0..3), six for a 256-bit one
/// (counters 0..5) — `enc_key`'s `GenericArray` length tracks the
/// key-generating key's `KeySize`, so the loop below simply runs until
/// both output arrays are full.
pub(crate) fn derive_keys<C>(
    key_generating_key: &C,
    nonce: &GenericArray<u8, U12>,
) -> (GenericArray<u8, U16>, GenericArray<u8, C::KeySize>)
where
    C: BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    let mut auth_key: GenericArray<u8, U16> = GenericArray::default();
    let mut enc_key: GenericArray<u8, C::KeySize> = GenericArray::default();
    let mut block: GenericArray<u8, U16> = GenericArray::default();
    let mut counter = 0u32;

    for derived_key in &mut [auth_key.as_mut_slice(), enc_key.as_mut_slice()] {
        for chunk in derived_key.chunks_mut(8) {
            block[..4].copy_from_slice(&counter.to_le_bytes());
            block[4..].copy_from_slice(nonce.as_slice());

            key_generating_key.encrypt_block(&mut block);
            chunk.copy_from_slice(&block.as_slice()[..8]);

            counter += 1;
        }
    }

    (auth_key, enc_key)
}
