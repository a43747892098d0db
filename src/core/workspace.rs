//! The collaborators a secret entry operates against.
//!
//! A `Workspace` bundles path resolution, filesystem access, the cipher,
//! and the key source. Entries stay plain values; every operation takes
//! the workspace explicitly and re-reads what it needs.

use std::path::Path;

use tracing::trace;

use crate::core::cipher::Cipher;
use crate::core::files::Files;
use crate::core::layout::Layout;
use crate::core::store::KeyProvider;
use crate::core::types::{Ciphertext, Contents};
use crate::error::{Result, SyncError};

/// Borrowed collaborators for secret entry operations.
///
/// Cheap to copy. All collaborators are `Send + Sync`, so one workspace
/// can be shared by threads processing disjoint entries.
#[derive(Clone, Copy)]
pub struct Workspace<'a> {
    layout: &'a Layout,
    files: &'a dyn Files,
    cipher: &'a dyn Cipher,
    keys: &'a dyn KeyProvider,
}

impl<'a> Workspace<'a> {
    /// Assemble a workspace.
    pub fn new(
        layout: &'a Layout,
        files: &'a dyn Files,
        cipher: &'a dyn Cipher,
        keys: &'a dyn KeyProvider,
    ) -> Self {
        Self {
            layout,
            files,
            cipher,
            keys,
        }
    }

    /// Path roots.
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }

    /// Filesystem access.
    pub fn files(&self) -> &'a dyn Files {
        self.files
    }

    /// Active cipher.
    pub fn cipher(&self) -> &'a dyn Cipher {
        self.cipher
    }

    /// Encrypt with the provided key.
    pub(crate) fn encrypt(&self, plaintext: &[u8]) -> Result<Ciphertext> {
        let key = self.keys.encryption_key()?;
        self.cipher.encrypt(plaintext, &key)
    }

    /// Decrypt with the provided key.
    pub(crate) fn decrypt(&self, ciphertext: &[u8]) -> Result<Contents> {
        let key = self.keys.encryption_key()?;
        Ok(Contents::new(self.cipher.decrypt(ciphertext, &key)?))
    }

    /// Read a file that must exist.
    pub(crate) fn read(&self, path: &Path) -> Result<Contents> {
        let bytes = self
            .files
            .read(path)
            .map_err(|e| SyncError::from_io(path, e))?;
        trace!(path = %path.display(), len = bytes.len(), "read");
        Ok(Contents::new(bytes))
    }

    /// Read a file, treating absence as `None`.
    pub(crate) fn read_optional(&self, path: &Path) -> Result<Option<Contents>> {
        if !self.files.is_file(path) {
            trace!(path = %path.display(), "absent");
            return Ok(None);
        }
        self.read(path).map(Some)
    }

    /// Create or truncate `path` with `contents`.
    pub(crate) fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.files
            .write(path, contents)
            .map_err(|source| SyncError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        trace!(path = %path.display(), len = contents.len(), "wrote");
        Ok(())
    }

    /// Create the parent directory of `path` and its ancestors.
    pub(crate) fn ensure_parent(&self, path: &Path) -> Result<()> {
        let Some(parent) = path.parent() else {
            return Ok(());
        };
        self.files
            .create_dir_all(parent)
            .map_err(|source| SyncError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        Ok(())
    }
}

impl std::fmt::Debug for Workspace<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("layout", self.layout)
            .field("cipher", &self.cipher.name())
            .finish()
    }
}
