//! Secret entry type.
//!
//! One tracked secret file and the logic that keeps its three copies in
//! sync:
//!
//! ```text
//! secrets repository          encrypted tree              project
//! <secrets>/<file>  --update-->  <encrypted>/<file>.enc  --apply-->  <project>/<destination>
//! ```
//!
//! Unencrypted entries skip the middle copy and apply straight from the
//! repository. Nothing is cached: every call re-reads the files involved.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::EntryStatus;
use crate::core::layout::Layout;
use crate::core::types::Contents;
use crate::core::workspace::Workspace;
use crate::error::{Result, SyncError};

/// A tracked secret file.
///
/// Deserializes from a manifest record where every field is optional.
/// Paths are not validated here; an empty or escaping path fails with
/// `SyncError::InvalidPath` when an operation needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretEntry {
    file: String,
    destination: String,
    encrypt: bool,
}

impl SecretEntry {
    /// Create an entry.
    pub fn new(file: impl Into<String>, destination: impl Into<String>, encrypt: bool) -> Self {
        Self {
            file: file.into(),
            destination: destination.into(),
            encrypt,
        }
    }

    /// Path of the secret relative to the secrets repository.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Path of the plaintext copy relative to the project.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether an encrypted artifact is maintained.
    pub fn encrypt(&self) -> bool {
        self.encrypt
    }

    /// Plaintext location in the secrets repository.
    pub fn repository_path(&self, layout: &Layout) -> Result<PathBuf> {
        layout.repository_path(&self.file)
    }

    /// Location of the encrypted artifact.
    pub fn encrypted_path(&self, layout: &Layout) -> Result<PathBuf> {
        layout.encrypted_path(&self.file)
    }

    /// Location of the plaintext copy in the project.
    pub fn destination_path(&self, layout: &Layout) -> Result<PathBuf> {
        layout.destination_path(&self.destination)
    }

    /// Current secret content.
    ///
    /// For unencrypted entries this is the repository file. For encrypted
    /// entries it is the decrypted artifact, or `None` when no artifact
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NotFound` if an unencrypted entry's repository
    /// file is missing, and `CipherError::DecryptionFailed` if the
    /// artifact cannot be decrypted.
    pub fn source_contents(&self, ws: &Workspace<'_>) -> Result<Option<Contents>> {
        if !self.encrypt {
            let path = self.repository_path(ws.layout())?;
            return ws.read(&path).map(Some);
        }

        let path = self.encrypted_path(ws.layout())?;
        match ws.read_optional(&path)? {
            Some(ciphertext) => ws.decrypt(&ciphertext).map(Some),
            None => Ok(None),
        }
    }

    /// Current plaintext copy in the project, or `None` if absent.
    pub fn destination_contents(&self, ws: &Workspace<'_>) -> Result<Option<Contents>> {
        let path = self.destination_path(ws.layout())?;
        ws.read_optional(&path)
    }

    /// Whether [`apply`](Self::apply) has work to do.
    ///
    /// True when the destination is missing (the source is not consulted)
    /// or when its bytes differ from the source. An encrypted entry
    /// without an artifact but with a destination also reports true.
    pub fn needs_apply(&self, ws: &Workspace<'_>) -> Result<bool> {
        let destination = match self.destination_contents(ws)? {
            Some(destination) => destination,
            None => return Ok(true),
        };
        let source = self.source_contents(ws)?;
        let needed = source.as_ref() != Some(&destination);
        trace!(entry = %self, needed, "checked destination");
        Ok(needed)
    }

    /// Whether [`update`](Self::update) would change what the artifact
    /// decrypts to.
    ///
    /// Always false for unencrypted entries. Otherwise true when the
    /// artifact is missing or decrypts to something other than the
    /// current repository file.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NotFound` if the repository file is missing.
    pub fn needs_update(&self, ws: &Workspace<'_>) -> Result<bool> {
        if !self.encrypt {
            return Ok(false);
        }
        let path = self.repository_path(ws.layout())?;
        let plaintext = ws.read(&path)?;
        let needed = self.source_contents(ws)?.as_ref() != Some(&plaintext);
        trace!(entry = %self, needed, "checked encrypted artifact");
        Ok(needed)
    }

    /// Classify the destination against the source.
    pub fn status(&self, ws: &Workspace<'_>) -> Result<EntryStatus> {
        let destination = self.destination_contents(ws)?;

        if destination.is_none() {
            if self.encrypt {
                let path = self.encrypted_path(ws.layout())?;
                if !ws.files().is_file(&path) {
                    return Ok(EntryStatus::Unavailable);
                }
            }
            return Ok(EntryStatus::Missing);
        }

        let status = match self.source_contents(ws)? {
            None => EntryStatus::Unavailable,
            Some(source) if Some(&source) == destination.as_ref() => EntryStatus::Synced,
            Some(_) => EntryStatus::Stale,
        };
        Ok(status)
    }

    /// Re-encrypt the repository file into the encrypted artifact.
    ///
    /// Does nothing for unencrypted entries, even when the repository file
    /// is missing. Otherwise always rewrites the artifact; use
    /// [`needs_update`](Self::needs_update) to skip unchanged content.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::NotFound` if the repository file is missing,
    /// `SyncError::Io` if the artifact cannot be written, or a cipher/key
    /// error if encryption fails.
    pub fn update(&self, ws: &Workspace<'_>) -> Result<()> {
        if !self.encrypt {
            return Ok(());
        }

        let encrypted_path = self.encrypted_path(ws.layout())?;
        let repository_path = self.repository_path(ws.layout())?;

        ws.ensure_parent(&encrypted_path)?;
        let plaintext = ws.read(&repository_path)?;
        let ciphertext = ws.encrypt(&plaintext)?;
        ws.write(&encrypted_path, &ciphertext)?;

        debug!(
            file = %self.file,
            path = %encrypted_path.display(),
            "encrypted artifact updated"
        );
        Ok(())
    }

    /// Write the current source content to the destination.
    ///
    /// Always rewrites the destination; use
    /// [`needs_apply`](Self::needs_apply) to skip unchanged content.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::MissingSource` when an encrypted entry has no
    /// artifact; the destination is left untouched. Also propagates every
    /// error of [`source_contents`](Self::source_contents), and
    /// `SyncError::Io` if the destination cannot be written.
    pub fn apply(&self, ws: &Workspace<'_>) -> Result<()> {
        let destination_path = self.destination_path(ws.layout())?;

        let contents = self
            .source_contents(ws)?
            .ok_or_else(|| SyncError::MissingSource {
                file: self.file.clone(),
            })?;

        ws.ensure_parent(&destination_path)?;
        ws.write(&destination_path, &contents)?;

        debug!(
            file = %self.file,
            path = %destination_path.display(),
            "destination applied"
        );
        Ok(())
    }
}

impl std::fmt::Display for SecretEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.file, self.destination)
    }
}
