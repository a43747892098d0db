//! In-memory filesystem backend.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use super::Files;

/// Virtual filesystem implementing [`Files`].
///
/// Directories are tracked explicitly, so writing into a directory that
/// was never created fails the same way it does on disk. Writes under a
/// path registered with [`Memory::fail_writes_under`] fail with
/// `PermissionDenied`.
#[derive(Debug, Default)]
pub struct Memory {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    read_only: Vec<PathBuf>,
}

impl State {
    fn dir_exists(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || path.parent().is_none() || self.dirs.contains(path)
    }

    fn mkdirs(&mut self, path: &Path) -> io::Result<()> {
        for ancestor in path.ancestors() {
            if self.files.contains_key(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("not a directory: {}", ancestor.display()),
                ));
            }
        }
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || ancestor.parent().is_none() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}

impl Memory {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn insert(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            // Seeding over an existing file path is a test bug; keep going.
            let _ = state.mkdirs(parent);
        }
        state.files.insert(path.to_path_buf(), contents.into());
    }

    /// Remove a file if present.
    pub fn remove(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.remove(path.as_ref())
    }

    /// Current contents of a file, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Whether a directory has been created.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.lock().dir_exists(path.as_ref())
    }

    /// Make every write and directory creation under `prefix` fail with
    /// `PermissionDenied`.
    ///
    /// Test-only fault injection; nothing in the sync core calls it.
    pub fn fail_writes_under(&self, prefix: impl Into<PathBuf>) {
        self.lock().read_only.push(prefix.into());
    }

    /// Number of files stored.
    pub fn len(&self) -> usize {
        self.lock().files.len()
    }

    /// Whether no files are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn check_writable(state: &State, path: &Path) -> io::Result<()> {
    if state.read_only.iter().any(|prefix| path.starts_with(prefix)) {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("read-only: {}", path.display()),
        ));
    }
    Ok(())
}

impl Files for Memory {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.lock().files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.lock();
        check_writable(&state, path)?;

        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("is a directory: {}", path.display()),
            ));
        }
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !state.dir_exists(parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", parent.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if state.dir_exists(path) {
            return Ok(());
        }
        check_writable(&state, path)?;
        state.mkdirs(path)
    }
}
