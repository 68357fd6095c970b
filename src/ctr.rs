//! RFC 8452's 32-bit little-endian counter mode.
//!
//! Deliberately not the `ctr` crate's generic counter mode: RFC 8452
//! increments only the low 4 bytes of the counter block, wrapping modulo
//! 2^32, while leaving bytes 4..16 untouched — the opposite convention
//! from GCM's high-byte counter. Building it directly on the raw block
//! primitive avoids silently picking up the wrong counter placement from
//! a generic implementation tuned for the opposite convention.

use aead::generic_array::{
    typenum::{U16, U8},
    GenericArray,
};
use cipher::BlockCipher;
use core::convert::TryInto;

/// XOR `buffer` with the keystream generated from `counter_block`,
/// truncated to `buffer`'s length. The caller is responsible for setting
/// up `counter_block` (in particular RFC 8452's "set the top bit of byte
/// 15" tag-to-counter transform) before calling this.
pub(crate) fn apply_keystream<C>(
    cipher: &C,
    mut counter_block: GenericArray<u8, U16>,
    buffer: &mut [u8],
) where
    C: BlockCipher<BlockSize = U16, ParBlocks = U8>,
{
    for chunk in buffer.chunks_mut(16) {
        let mut keystream_block = counter_block.clone();
        cipher.encrypt_block(&mut keystream_block);

        let counter = u32::from_le_bytes(counter_block[..4].try_into().unwrap()).wrapping_add(1);
        counter_block[..4].copy_from_slice(&counter.to_le_bytes());

        for (byte, ks) in chunk.iter_mut().zip(keystream_block.iter()) {
            *byte ^= ks;
        }
    }
}
