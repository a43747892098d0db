//! Deterministic test cipher.
//!
//! XORs the plaintext with the key bytes behind a fixed header. Not secure.
//! Deterministic, so repeated updates produce identical artifacts.

use secretsync::error::CipherError;
use secretsync::{Cipher, Key, Result};

const HEADER: &[u8] = b"MARKED1:";

/// Header-tagged XOR cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Marked;

fn keystream(key: &Key) -> Result<&[u8]> {
    let bytes = key.expose().as_bytes();
    if bytes.is_empty() {
        return Err(CipherError::InvalidKey("empty key".to_string()).into());
    }
    Ok(bytes)
}

fn xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect()
}

impl Cipher for Marked {
    fn encrypt(&self, plaintext: &[u8], key: &Key) -> Result<Vec<u8>> {
        let mut out = HEADER.to_vec();
        out.extend(xor(plaintext, keystream(key)?));
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], key: &Key) -> Result<Vec<u8>> {
        let body = ciphertext.strip_prefix(HEADER).ok_or_else(|| {
            CipherError::DecryptionFailed("missing MARKED1 header".to_string())
        })?;
        Ok(xor(body, keystream(key)?))
    }

    fn name(&self) -> &'static str {
        "marked"
    }
}
