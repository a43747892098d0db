//! Filesystem-based key storage implementation.
//!
//! Manages key generation and retrieval under a key directory
//! (`~/.secretsync/keys/<project_id>/identity.key` by default).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
#[cfg(unix)]
use tracing::warn;

use super::Store;
use crate::core::cipher::Age;
use crate::core::constants;
use crate::core::domain::Key;
use crate::error::{Result, StoreError};

/// Filesystem-based key storage.
#[derive(Debug, Clone)]
pub struct Filesystem {
    base_dir: PathBuf,
}

impl Filesystem {
    /// Store keys under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store keys under `~/.secretsync/keys`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if the home directory is unknown.
    pub fn in_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::new(home.join(constants::KEY_DIR)))
    }

    /// Base directory for all keys.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Key file path for a project.
    pub fn key_path(&self, project_id: &str) -> PathBuf {
        self.base_dir.join(project_id).join(constants::KEY_FILE)
    }

    /// Warn when a key file is readable by anyone but its owner (Unix only).
    #[cfg(unix)]
    fn check_permissions(path: &Path) {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = fs::metadata(path) {
            let mode = metadata.permissions().mode() & 0o777;
            if mode & 0o077 != 0 {
                warn!(
                    path = %path.display(),
                    mode = %format!("{:o}", mode),
                    "insecure key file permissions"
                );
            }
        }
    }
}

impl Store for Filesystem {
    fn generate_key(&self, project_id: &str) -> Result<Key> {
        let key_path = self.key_path(project_id);
        debug!(path = %key_path.display(), "generating new key");

        let key = Age::generate_key();

        if let Some(dir) = key_path.parent() {
            fs::create_dir_all(dir).map_err(StoreError::WriteFailed)?;
        }
        fs::write(&key_path, format!("{}\n", key.expose())).map_err(StoreError::WriteFailed)?;

        // Restrict permissions on key file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&key_path, fs::Permissions::from_mode(0o600))
                .map_err(StoreError::WriteFailed)?;
        }

        debug!(path = %key_path.display(), "key saved");

        Ok(key)
    }

    fn load_key(&self, project_id: &str) -> Result<Key> {
        let key_path = self.key_path(project_id);
        debug!(path = %key_path.display(), "loading key");

        if !key_path.is_file() {
            return Err(StoreError::NoKey(project_id.to_string()).into());
        }

        #[cfg(unix)]
        Self::check_permissions(&key_path);

        let contents = zeroize::Zeroizing::new(
            fs::read_to_string(&key_path).map_err(StoreError::ReadFailed)?,
        );
        let material = contents.trim();
        if material.is_empty() {
            return Err(StoreError::InvalidFormat(format!(
                "empty key file: {}",
                key_path.display()
            ))
            .into());
        }

        Ok(Key::new(material))
    }

    fn has_key(&self, project_id: &str) -> bool {
        self.key_path(project_id).is_file()
    }
}
