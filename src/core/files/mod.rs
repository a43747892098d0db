//! Filesystem access.
//!
//! The sync core reads and writes secret files only through the `Files`
//! trait so it can run against the real disk or an in-memory tree.
//!
//! ## Backends
//!
//! - **Disk**: `std::fs`, new files created owner-only on Unix.
//! - **Memory**: virtual filesystem for tests and dry runs.

use std::io;
use std::path::Path;

mod disk;
mod memory;

pub use disk::Disk;
pub use memory::Memory;

/// Byte-exact filesystem operations used by the sync core.
///
/// Implementations must behave like a real filesystem where it matters to
/// callers: reading a missing file and writing into a missing directory
/// both fail with `io::ErrorKind::NotFound`.
pub trait Files: Send + Sync {
    /// Read the full contents of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate a file and write `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all missing ancestors.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
