//! Environment-variable key storage.
//!
//! Reads the key from `SECRETSYNC_KEY`, the usual setup on CI machines
//! where no key file is provisioned. The same key serves every project.

use tracing::debug;

use super::Store;
use crate::core::constants;
use crate::core::domain::Key;
use crate::error::{Result, StoreError};

/// Read-only store backed by an environment variable.
#[derive(Debug, Clone)]
pub struct Environment {
    var: String,
}

impl Environment {
    /// Read the key from `SECRETSYNC_KEY`.
    pub fn new() -> Self {
        Self::with_var(constants::KEY_ENV)
    }

    /// Read the key from a custom variable.
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Variable the key is read from.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Whether the variable is set to a non-empty value.
    pub fn is_set(&self) -> bool {
        std::env::var(&self.var)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for Environment {
    fn generate_key(&self, _project_id: &str) -> Result<Key> {
        Err(StoreError::ReadOnly("keys from the environment cannot be generated").into())
    }

    fn load_key(&self, project_id: &str) -> Result<Key> {
        debug!(var = %self.var, "loading key from environment");

        let value = zeroize::Zeroizing::new(
            std::env::var(&self.var).map_err(|_| StoreError::NoKey(project_id.to_string()))?,
        );
        let material = value.trim();
        if material.is_empty() {
            return Err(StoreError::NoKey(project_id.to_string()).into());
        }

        Ok(Key::new(material))
    }

    fn has_key(&self, _project_id: &str) -> bool {
        self.is_set()
    }
}
