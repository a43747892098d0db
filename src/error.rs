//! Error types.
//!
//! Errors are grouped by concern (manifest config, key storage, cipher,
//! synchronization) and unified under [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all secretsync operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Manifest loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read manifest: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("manifest json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("duplicate {field} in manifest: {value}")]
    Duplicate { field: &'static str, value: String },
}

/// Key storage errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no encryption key found for project: {0}")]
    NoKey(String),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read key: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write key: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("invalid key format: {0}")]
    InvalidFormat(String),

    #[error("key store is read-only: {0}")]
    ReadOnly(&'static str),
}

/// Encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),

    #[error("invalid encryption key: {0}")]
    InvalidKey(String),
}

/// Errors raised while synchronizing a secret entry.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("no encrypted copy of '{file}' to apply from")]
    MissingSource { file: String },

    #[error("invalid {field} path '{path}': {reason}")]
    InvalidPath {
        field: &'static str,
        path: String,
        reason: &'static str,
    },

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Classify an io error for `path`, keeping not-found distinct.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
