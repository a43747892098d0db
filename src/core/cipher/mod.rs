//! Cryptographic operations.
//!
//! Provides the encryption/decryption abstraction consumed by the sync core,
//! plus the default age backend.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file (e.g., `aes.rs`)
//! 3. Re-export from this module
//!
//! The sync core only relies on the round-trip law
//! `decrypt(encrypt(x, k), k) == x` and on corrupt input failing with
//! `CipherError::DecryptionFailed`.

use crate::core::domain::Key;
use crate::core::types::Ciphertext;
use crate::error::Result;

mod age;

pub use age::Age;

/// Symmetric encryption backend.
///
/// A single shared [`Key`] both encrypts and decrypts. The serialized
/// ciphertext format is backend-specific and opaque to callers.
pub trait Cipher: Send + Sync {
    /// Encrypt plaintext bytes with the shared key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key cannot be used by this
    /// backend, or `CipherError::EncryptionFailed` on any other failure.
    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Ciphertext>;

    /// Decrypt ciphertext produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` for corrupt or malformed
    /// ciphertext and for a key that does not match.
    fn decrypt(&self, ciphertext: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}
