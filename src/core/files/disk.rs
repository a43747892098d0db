//! Real filesystem backend.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::Files;

/// `std::fs`-backed implementation of [`Files`].
///
/// Newly created files are written with mode 0600 on Unix since they
/// usually hold plaintext secrets. Existing files keep their permissions.
///
/// Writes are not atomic: the file is truncated and then written in place,
/// so a failure partway through can leave a partially written artifact or
/// destination. The next successful `update` or `apply` rewrites it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disk;

impl Files for Disk {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.create(true).truncate(true).write(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.flush()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
