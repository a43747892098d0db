//! Age encryption backend implementation.
//!
//! The shared key is an x25519 identity (`AGE-SECRET-KEY-1...`). Files are
//! encrypted to the identity's own recipient and ASCII-armored, so the
//! artifacts diff cleanly as text in the consuming project.

use std::io::{Read, Write};

use ::age::secrecy::ExposeSecret;
use ::age::x25519;
use tracing::trace;

use super::Cipher;
use crate::core::domain::Key;
use crate::core::types::Ciphertext;
use crate::error::{CipherError, Result};

/// Age-based cipher using a shared x25519 identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Age;

impl Age {
    /// Generate fresh key material for this backend.
    pub fn generate_key() -> Key {
        let identity = x25519::Identity::generate();
        Key::new(identity.to_string().expose_secret())
    }

    fn identity(key: &Key) -> Result<x25519::Identity> {
        key.expose()
            .trim()
            .parse::<x25519::Identity>()
            .map_err(|e| CipherError::InvalidKey(e.to_string()).into())
    }
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Ciphertext> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let recipient = Self::identity(key)?.to_public();
        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(
                age::armor::ArmoredWriter::wrap_output(
                    &mut encrypted,
                    age::armor::Format::AsciiArmor,
                )
                .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?,
            )
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8], key: &Key) -> Result<Vec<u8>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let identity = Self::identity(key)?;
        let reader = age::armor::ArmoredReader::new(ciphertext);
        let decryptor = age::Decryptor::new(reader)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Vec::new();
        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        Ok(decrypted)
    }
}
