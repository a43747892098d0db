//! Domain types.

mod entry;
mod key;
mod status;

pub use entry::SecretEntry;
pub use key::Key;
pub use status::EntryStatus;
