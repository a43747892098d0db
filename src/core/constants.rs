//! Constants used throughout secretsync.
//!
//! Centralizes magic strings and configuration values.

/// Manifest file name in the project root (.configure.toml).
pub const CONFIG_FILE: &str = ".configure.toml";

/// Directory, relative to the project root, holding encrypted artifacts.
pub const ENCRYPTED_DIR: &str = ".configure-files";

/// Extension appended to a secret's path to form its encrypted artifact.
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// Secrets repository location relative to HOME (~/.secretsync/repository).
pub const SECRETS_DIR: &str = ".secretsync/repository";

/// Key storage directory relative to HOME (~/.secretsync/keys).
pub const KEY_DIR: &str = ".secretsync/keys";

/// Key file name inside a project's key directory.
pub const KEY_FILE: &str = "identity.key";

/// Environment variable holding the encryption key.
pub const KEY_ENV: &str = "SECRETSYNC_KEY";

/// Environment variable overriding the secrets repository location.
pub const SECRETS_DIR_ENV: &str = "SECRETSYNC_SECRETS_DIR";
