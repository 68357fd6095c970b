//! The granular error taxonomy for this crate's inherent API.
//!
//! The `aead::Aead` trait impl on [`crate::AesGcmSiv`] still returns the
//! ecosystem's opaque `aead::Error` (that trait's contract gives no room
//! for more), but the inherent [`crate::Cipher`] API returns this enum
//! directly so callers can distinguish a bad key from a tampered
//! ciphertext.

use core::fmt;

/// Everything that can go wrong constructing a context or running
/// encrypt/decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key-generating key was neither 16 nor 32 bytes.
    InvalidKeySize,
    /// The nonce was not exactly 12 bytes.
    InvalidNonceSize,
    /// Plaintext, associated data, or ciphertext exceeded the bounds in
    /// RFC 8452 Section 6 (or, for ciphertext, was shorter than a tag).
    InvalidInputSize,
    /// Decryption's tag comparison failed; no plaintext is returned.
    AuthenticationFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidKeySize => "invalid key size (must be 16 or 32 bytes)",
            Error::InvalidNonceSize => "invalid nonce size (must be 12 bytes)",
            Error::InvalidInputSize => "input exceeds the maximum size for this operation",
            Error::AuthenticationFailure => "authentication failure",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for aead::Error {
    fn from(_: Error) -> aead::Error {
        aead::Error
    }
}

/// Convenience alias for this crate's inherent, non-`aead`-trait API.
pub type Result<T> = core::result::Result<T, Error>;
