//! Test assertion helpers.

use secretsync::error::{CipherError, Error, SyncError};
use secretsync::Result;

/// Assert that an operation failed with `SyncError::NotFound`.
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::Sync(SyncError::NotFound { .. })) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Assert that an operation failed with `SyncError::MissingSource`.
pub fn assert_missing_source<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::Sync(SyncError::MissingSource { .. })) => {}
        other => panic!("expected MissingSource, got {:?}", other),
    }
}

/// Assert that an operation failed with `CipherError::DecryptionFailed`.
pub fn assert_decryption_failed<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::Cipher(CipherError::DecryptionFailed(_))) => {}
        other => panic!("expected DecryptionFailed, got {:?}", other),
    }
}

/// Assert that an operation failed with `SyncError::InvalidPath`.
pub fn assert_invalid_path<T: std::fmt::Debug>(result: Result<T>) {
    match result {
        Err(Error::Sync(SyncError::InvalidPath { .. })) => {}
        other => panic!("expected InvalidPath, got {:?}", other),
    }
}
