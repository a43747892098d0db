//! Path resolution.
//!
//! Derives the three locations of a secret from externally supplied roots.
//! Every derivation is a pure function of the roots and the entry's
//! relative paths; nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{Result, StoreError, SyncError};

/// Roots of the secrets repository, the consuming project, and the
/// encrypted-artifact tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    secrets_dir: PathBuf,
    project_dir: PathBuf,
    encrypted_dir: PathBuf,
}

impl Layout {
    /// Create a layout with the encrypted-artifact tree at
    /// `<project_dir>/.configure-files`.
    pub fn new(secrets_dir: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        Self {
            secrets_dir: secrets_dir.into(),
            encrypted_dir: project_dir.join(constants::ENCRYPTED_DIR),
            project_dir,
        }
    }

    /// Override where encrypted artifacts are stored.
    pub fn with_encrypted_dir(mut self, encrypted_dir: impl Into<PathBuf>) -> Self {
        self.encrypted_dir = encrypted_dir.into();
        self
    }

    /// Layout for a project using the default secrets repository.
    ///
    /// The repository is `$SECRETSYNC_SECRETS_DIR` when set, otherwise
    /// `~/.secretsync/repository`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if neither is available.
    pub fn discover(project_dir: impl Into<PathBuf>) -> Result<Self> {
        let secrets_dir = match std::env::var_os(constants::SECRETS_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or(StoreError::NoHomeDir)?
                .join(constants::SECRETS_DIR),
        };
        let layout = Self::new(secrets_dir, project_dir);
        debug!(
            secrets = %layout.secrets_dir.display(),
            project = %layout.project_dir.display(),
            "layout resolved"
        );
        Ok(layout)
    }

    /// Root of the private secrets repository.
    pub fn secrets_dir(&self) -> &Path {
        &self.secrets_dir
    }

    /// Root of the consuming project.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Root of the encrypted-artifact tree.
    pub fn encrypted_dir(&self) -> &Path {
        &self.encrypted_dir
    }

    /// Plaintext location of `file` in the secrets repository.
    pub fn repository_path(&self, file: &str) -> Result<PathBuf> {
        validate_relative("file", file)?;
        Ok(self.secrets_dir.join(file))
    }

    /// Encrypted-artifact location of `file`: its repository-relative
    /// path under the encrypted tree, with `.enc` appended.
    pub fn encrypted_path(&self, file: &str) -> Result<PathBuf> {
        validate_relative("file", file)?;
        let mut name = self.encrypted_dir.join(file).into_os_string();
        name.push(".");
        name.push(constants::ENCRYPTED_EXTENSION);
        Ok(PathBuf::from(name))
    }

    /// Plaintext location of `destination` in the consuming project.
    pub fn destination_path(&self, destination: &str) -> Result<PathBuf> {
        validate_relative("destination", destination)?;
        Ok(self.project_dir.join(destination))
    }
}

/// Check that `path` is non-empty, relative, and stays below its root.
///
/// # Errors
///
/// Returns `SyncError::InvalidPath` naming `field` on failure.
pub fn validate_relative(field: &'static str, path: &str) -> Result<()> {
    let invalid = |reason| SyncError::InvalidPath {
        field,
        path: path.to_string(),
        reason,
    };

    if path.trim().is_empty() {
        return Err(invalid("must not be empty").into());
    }

    let mut has_name = false;
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir => return Err(invalid("must not contain '..'").into()),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("must be relative").into())
            }
        }
    }

    if !has_name {
        return Err(invalid("must name a file").into());
    }

    Ok(())
}
