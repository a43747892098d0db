//! Backend selection logic for key storage
//!
//! Uses the environment variable when it is set (CI, containers), and the
//! per-user key directory otherwise.

use tracing::debug;

use super::{Environment, Filesystem, Store};
use crate::error::Result;

/// Default backend selection
///
/// `SECRETSYNC_KEY` set: Environment
/// Otherwise: Filesystem under `~/.secretsync/keys`
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` when falling back to the filesystem
/// without a home directory.
pub fn default_backend() -> Result<Box<dyn Store>> {
    let env = Environment::new();
    if env.is_set() {
        debug!(var = %env.var(), "using environment key backend");
        return Ok(Box::new(env));
    }

    debug!("using filesystem key backend");
    Ok(Box::new(Filesystem::in_home()?))
}
