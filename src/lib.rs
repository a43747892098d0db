//! Secretsync - keep secret files mirrored between a private secrets
//! repository, an encrypted copy committed to a project, and the plaintext
//! copy the project builds with.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error types per concern
//! └── core/             # Core library components
//!     ├── domain/       # SecretEntry, Key, EntryStatus
//!     ├── workspace     # Collaborators an entry operates against
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age encryption implementation
//!     ├── store/        # Key storage backends
//!     │   ├── mod       # Store and KeyProvider traits
//!     │   ├── fs        # Key files under ~/.secretsync/keys
//!     │   └── env       # Key from SECRETSYNC_KEY
//!     ├── files/        # Filesystem access (disk, in-memory)
//!     ├── layout        # Repository/encrypted/destination paths
//!     └── config        # .configure.toml manifest
//! ```
//!
//! # Example
//!
//! ```no_run
//! use secretsync::{Age, Config, Disk, Layout, ProjectKey, Workspace};
//! use std::path::Path;
//!
//! # fn main() -> secretsync::Result<()> {
//! let project = Path::new(".");
//! let config = Config::load_from(project)?;
//! let layout = Layout::discover(project)?;
//! let keys = ProjectKey::from_default(config.project_id(project))?;
//! let ws = Workspace::new(&layout, &Disk, &Age, &keys);
//!
//! for entry in config.entries() {
//!     if entry.needs_apply(&ws)? {
//!         entry.apply(&ws)?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;

pub use crate::core::cipher::{Age, Cipher};
pub use crate::core::config::{ensure_gitignore, Config, Format};
pub use crate::core::domain::{EntryStatus, Key, SecretEntry};
pub use crate::core::files::{Disk, Files, Memory};
pub use crate::core::layout::Layout;
pub use crate::core::store::{KeyProvider, ProjectKey, Store};
pub use crate::core::types::Contents;
pub use crate::core::workspace::Workspace;
pub use crate::error::{Error, Result};
