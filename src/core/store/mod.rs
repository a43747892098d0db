//! Key storage.
//!
//! Provides key loading (and, where writable, generation) behind a storage
//! abstraction, plus the [`KeyProvider`] seam the sync core consumes.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `keychain.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Cloud { /* ... */ }
//!
//! impl Store for Cloud {
//!     fn generate_key(&self, project_id: &str) -> Result<Key> {
//!         // Generate and store in cloud
//!     }
//!     fn load_key(&self, project_id: &str) -> Result<Key> {
//!         // Load from cloud
//!     }
//!     fn has_key(&self, project_id: &str) -> bool {
//!         // Check cloud storage
//!     }
//! }
//! ```

use tracing::debug;

use crate::core::domain::Key;
use crate::core::types::ProjectId;
use crate::error::Result;

mod backend;
mod env;
mod fs;

pub use backend::default_backend;
pub use env::Environment;
pub use fs::Filesystem;

/// Key storage trait.
///
/// Keys are stored per project so one machine can hold keys for several
/// consuming projects.
pub trait Store: Send + Sync {
    /// Generate and persist a new key for a project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if generation or storage fails, or
    /// `StoreError::ReadOnly` for stores that cannot persist keys.
    fn generate_key(&self, project_id: &str) -> Result<Key>;

    /// Load the key for a project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoKey` if no key exists, or
    /// `StoreError::InvalidFormat` if it cannot be read as key material.
    fn load_key(&self, project_id: &str) -> Result<Key>;

    /// Check if a key exists for a project.
    fn has_key(&self, project_id: &str) -> bool;
}

/// Source of the shared encryption key.
///
/// The sync core asks for the key only when an encrypted entry needs it,
/// so manifests with plaintext-only entries work without any key.
pub trait KeyProvider: Send + Sync {
    /// The key used for every encrypt and decrypt in this process.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key is unavailable.
    fn encryption_key(&self) -> Result<Key>;
}

impl KeyProvider for Key {
    fn encryption_key(&self) -> Result<Key> {
        Ok(self.clone())
    }
}

/// [`KeyProvider`] reading a project's key from a [`Store`].
///
/// The key is loaded on each request; nothing is cached.
pub struct ProjectKey {
    store: Box<dyn Store>,
    project_id: ProjectId,
}

impl ProjectKey {
    /// Provide the key for `project_id` from `store`.
    pub fn new(store: Box<dyn Store>, project_id: impl Into<String>) -> Self {
        Self {
            store,
            project_id: project_id.into(),
        }
    }

    /// Provide the key for `project_id` from the default store.
    pub fn from_default(project_id: impl Into<String>) -> Result<Self> {
        Ok(Self::new(default_backend()?, project_id))
    }

    /// Project whose key is provided.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

impl std::fmt::Debug for ProjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectKey")
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl KeyProvider for ProjectKey {
    fn encryption_key(&self) -> Result<Key> {
        debug!(project = %self.project_id, "loading encryption key");
        self.store.load_key(&self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cipher::Age;
    use crate::error::{Error, StoreError};
    use tempfile::TempDir;

    #[test]
    fn test_key_provides_itself() {
        let key = Age::generate_key();
        assert_eq!(key.encryption_key().unwrap(), key);
    }

    #[test]
    fn test_project_key_loads_from_store() {
        let tmp = TempDir::new().unwrap();
        let store = Filesystem::new(tmp.path());
        let key = store.generate_key("app").unwrap();

        let provider = ProjectKey::new(Box::new(Filesystem::new(tmp.path())), "app");
        assert_eq!(provider.project_id(), "app");
        assert_eq!(provider.encryption_key().unwrap(), key);
    }

    #[test]
    fn test_project_key_missing() {
        let tmp = TempDir::new().unwrap();
        let provider = ProjectKey::new(Box::new(Filesystem::new(tmp.path())), "app");

        assert!(matches!(
            provider.encryption_key(),
            Err(Error::Store(StoreError::NoKey(_)))
        ));
    }
}
