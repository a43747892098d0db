//! Key type.
//!
//! Wraps shared key material with secure memory handling.

use zeroize::Zeroizing;

/// Shared symmetric key material.
///
/// Opaque to the sync core; only a [`Cipher`](crate::core::cipher::Cipher)
/// interprets it. The contents are wiped from memory on drop and never
/// printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    inner: Zeroizing<String>,
}

impl Key {
    /// Wrap raw key material.
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(material.into()),
        }
    }

    /// The raw key material.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("inner", &"<redacted>").finish()
    }
}
