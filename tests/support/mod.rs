//! Test support utilities for secretsync integration tests.
//!
//! Provides reusable test environment setup and helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod cipher;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use cipher::Marked;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use secretsync::{Age, Cipher, Disk, Key, Layout, Workspace};
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own secrets repository and project directory.
/// No process-global state is mutated, so tests can run in parallel.
pub struct Test {
    /// Temporary secrets repository
    pub secrets: TempDir,
    /// Temporary consuming project
    pub project: TempDir,
    /// Layout over the two directories
    pub layout: Layout,
    /// Shared age key
    pub key: Key,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let secrets = TempDir::new().expect("failed to create temp secrets dir");
        let project = TempDir::new().expect("failed to create temp project dir");
        let layout = Layout::new(secrets.path(), project.path());

        Self {
            secrets,
            project,
            layout,
            key: Age::generate_key(),
        }
    }

    /// Create a test environment with repository files already written.
    pub fn with_secrets(files: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (file, contents) in files {
            t.write_secret(file, contents.as_bytes());
        }
        t
    }

    /// Workspace on disk using the age cipher.
    pub fn ws(&self) -> Workspace<'_> {
        Workspace::new(&self.layout, &Disk, &Age, &self.key)
    }

    /// Workspace on disk using another cipher.
    pub fn ws_with<'a>(&'a self, cipher: &'a dyn Cipher) -> Workspace<'a> {
        Workspace::new(&self.layout, &Disk, cipher, &self.key)
    }

    /// Write a plaintext file into the secrets repository.
    pub fn write_secret(&self, file: &str, contents: &[u8]) {
        let path = self.secrets.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Write a file into the project.
    pub fn write_destination(&self, destination: &str, contents: &[u8]) {
        let path = self.project.path().join(destination);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Read a project file, if it exists.
    pub fn destination(&self, destination: &str) -> Option<Vec<u8>> {
        fs::read(self.project.path().join(destination)).ok()
    }

    /// Path of the encrypted artifact for `file`.
    pub fn artifact_path(&self, file: &str) -> PathBuf {
        self.layout.encrypted_path(file).unwrap()
    }

    /// Read the encrypted artifact for `file`, if it exists.
    pub fn artifact(&self, file: &str) -> Option<Vec<u8>> {
        fs::read(self.artifact_path(file)).ok()
    }
}

/// Install a tracing subscriber that writes through the test harness.
///
/// Honors `SECRETSYNC_LOG`; defaults to debug output for this crate.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("SECRETSYNC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("secretsync=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
