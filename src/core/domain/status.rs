//! Entry status type.

/// Synchronization state of a single secret entry's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Destination matches the source byte for byte.
    Synced,
    /// Destination exists but differs from the source.
    Stale,
    /// Destination file does not exist.
    Missing,
    /// Encrypted entry with no encrypted artifact to apply from.
    Unavailable,
}

impl EntryStatus {
    /// Whether `apply` would change anything (or fail for lack of a source).
    pub fn needs_apply(&self) -> bool {
        !matches!(self, Self::Synced)
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Synced => "synced",
            Self::Stale => "stale",
            Self::Missing => "missing",
            Self::Unavailable => "unavailable",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_synced_skips_apply() {
        assert!(!EntryStatus::Synced.needs_apply());
        assert!(EntryStatus::Stale.needs_apply());
        assert!(EntryStatus::Missing.needs_apply());
        assert!(EntryStatus::Unavailable.needs_apply());
    }

    #[test]
    fn test_display() {
        assert_eq!(EntryStatus::Stale.to_string(), "stale");
        assert_eq!(EntryStatus::Unavailable.to_string(), "unavailable");
    }
}
