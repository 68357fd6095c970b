//! POLYVAL: the GHASH-like universal hash AES-GCM-SIV authenticates with.
//!
//! `POLYVAL(H, X_1, ..., X_s) = S_s` where `S_0 = 0` and
//! `S_j = dot(S_{j-1} XOR X_j, H)`, built directly on this crate's own
//! [`FieldElement`].

use crate::field::FieldElement;
use zeroize::Zeroize;

/// A running POLYVAL computation keyed by `H`.
#[repr(align(16))]
pub(crate) struct Polyval {
    h: FieldElement,
    s: FieldElement,
}

impl Polyval {
    /// Initialize POLYVAL with the given 16-byte authentication key.
    pub(crate) fn new(h: &[u8; 16]) -> Self {
        Polyval {
            h: FieldElement::from_bytes(h),
            s: FieldElement::ZERO,
        }
    }

    /// Fold one 16-byte block into the running hash.
    pub(crate) fn update_block(&mut self, block: &[u8; 16]) {
        let x = FieldElement::from_bytes(block);
        self.s = self.s.add(x).dot(self.h);
    }

    /// Fold arbitrary-length data into the running hash, zero-padding the
    /// final partial block (the padding is never part of the output —
    /// only its effect on the hash is).
    pub(crate) fn update_padded(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(16);
        for chunk in &mut chunks {
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);
            self.update_block(&block);
        }

        let rem = chunks.remainder();
        if !rem.is_empty() {
            let mut block = [0u8; 16];
            block[..rem.len()].copy_from_slice(rem);
            self.update_block(&block);
        }
    }

    /// Consume the accumulator, returning `S_s` and zeroing the internal
    /// state.
    pub(crate) fn finish(mut self) -> [u8; 16] {
        let out = self.s.to_bytes();
        self.h.zeroize();
        self.s.zeroize();
        out
    }
}
