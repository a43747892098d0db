//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use zeroize::Zeroizing;

/// Raw bytes of a secret file, wiped from memory on drop.
///
/// Always paired with `Option` where a file may be absent, so an empty
/// secret and a missing one stay distinguishable.
pub type Contents = Zeroizing<Vec<u8>>;

/// Encrypted artifact bytes (age-armored ciphertext for the default cipher).
pub type Ciphertext = Vec<u8>;

/// Identifier used to look up a project's key in a key store.
pub type ProjectId = String;
