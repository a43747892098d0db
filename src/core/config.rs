//! Manifest file management.
//!
//! Handles reading, writing, and validating the `.configure.toml` manifest
//! that lists a project's tracked secrets. A `.json` manifest path is read
//! and written as JSON instead.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::SecretEntry;
use crate::core::layout::validate_relative;
use crate::core::types::ProjectId;
use crate::error::{ConfigError, Result};

/// Project manifest stored in `.configure.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the manifest
    pub configure: Meta,
    /// Tracked secret files
    #[serde(default)]
    pub files: Vec<SecretEntry>,
}

/// Metadata section of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Manifest version
    pub version: String,
    /// Key store identifier; defaults to the project directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// On-disk manifest encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl Config {
    /// Create an empty manifest with the current version
    pub fn new() -> Self {
        Self {
            configure: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                project: None,
            },
            files: Vec::new(),
        }
    }

    /// Default manifest path for a project
    pub fn config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(constants::CONFIG_FILE)
    }

    /// Check if a project has a manifest at the default path
    pub fn exists(project_dir: &Path) -> bool {
        Self::config_path(project_dir).is_file()
    }

    /// Load and validate a manifest
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse`/`Json` if it is malformed, or a validation
    /// error from [`Config::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading manifest");

        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents, Format::from_path(path))?;

        debug!(files = config.files.len(), "manifest loaded");

        config.validate()?;

        Ok(config)
    }

    /// Load the manifest at the project's default path
    pub fn load_from(project_dir: &Path) -> Result<Self> {
        Self::load(&Self::config_path(project_dir))
    }

    /// Parse a manifest without validating it
    pub fn parse(contents: &str, format: Format) -> Result<Self> {
        let config: Self = match format {
            Format::Toml => toml::from_str(contents).map_err(ConfigError::Parse)?,
            Format::Json => serde_json::from_str(contents).map_err(ConfigError::Json)?,
        };
        Ok(config)
    }

    /// Serialize the manifest
    pub fn render(&self, format: Format) -> Result<String> {
        let contents = match format {
            Format::Toml => toml::to_string_pretty(self).map_err(ConfigError::Serialize)?,
            Format::Json => serde_json::to_string_pretty(self).map_err(ConfigError::Json)? + "\n",
        };
        Ok(contents)
    }

    /// Save the manifest to `path`
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving manifest");

        let contents = self.render(Format::from_path(path))?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Tracked secret entries
    pub fn entries(&self) -> &[SecretEntry] {
        &self.files
    }

    /// Track another secret
    pub fn add(&mut self, entry: SecretEntry) {
        self.files.push(entry);
    }

    /// Key store identifier: the `project` field, else the directory name
    pub fn project_id(&self, project_dir: &Path) -> ProjectId {
        if let Some(project) = self.configure.project.as_deref() {
            if !project.trim().is_empty() {
                return project.to_string();
            }
        }
        project_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "default".to_string())
    }

    /// Validate the manifest structure and contents
    ///
    /// Checks:
    /// - Version field is present and dotted
    /// - Every `file` and `destination` is a non-empty relative path
    /// - No two entries share a destination
    /// - No two encrypted entries share a `file` (and so an artifact)
    ///
    /// Paths are compared after dropping `.` segments and repeated
    /// separators, so `./config//key` and `config/key` collide.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField`, `InvalidValue`, `Duplicate`,
    /// or `SyncError::InvalidPath` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating manifest");

        if self.configure.version.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.configure.version.split('.').collect();
        if version_parts.len() < 2 || version_parts.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid version: {}", self.configure.version),
            }
            .into());
        }

        let mut destinations = HashSet::new();
        let mut artifacts = HashSet::new();
        for entry in &self.files {
            validate_relative("file", entry.file())?;
            validate_relative("destination", entry.destination())?;

            if !destinations.insert(normalized_segments(entry.destination())) {
                return Err(ConfigError::Duplicate {
                    field: "destination",
                    value: entry.destination().to_string(),
                }
                .into());
            }
            if entry.encrypt() && !artifacts.insert(normalized_segments(entry.file())) {
                return Err(ConfigError::Duplicate {
                    field: "file",
                    value: entry.file().to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensure the project's `.gitignore` lists every destination
///
/// Plaintext copies must never be committed alongside their encrypted
/// artifacts. Entries are anchored to the project root (`/config/api.key`).
///
/// # Returns
///
/// Number of lines added.
///
/// # Errors
///
/// Returns `SyncError::InvalidPath` for an invalid destination, or an io
/// error if the file cannot be read or written.
pub fn ensure_gitignore(project_dir: &Path, entries: &[SecretEntry]) -> Result<usize> {
    let gitignore = project_dir.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    let mut added = 0;
    for entry in entries {
        validate_relative("destination", entry.destination())?;
        let pattern = gitignore_pattern(entry.destination());
        let present = updated
            .lines()
            .any(|l| l.trim_start().trim_end_matches('\r') == pattern);
        if !present {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(&pattern);
            updated.push('\n');
            added += 1;
        }
    }

    if updated != existing {
        debug!(path = %gitignore.display(), added, "updating gitignore");
        std::fs::write(&gitignore, updated)?;
    }

    Ok(added)
}

/// Normal components of a relative path, without `.` segments.
fn normalized_segments(path: &str) -> Vec<String> {
    Path::new(path)
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}

/// Root-anchored gitignore pattern matching exactly one destination.
///
/// Glob metacharacters and trailing spaces are backslash-escaped so git
/// reads every segment literally.
fn gitignore_pattern(destination: &str) -> String {
    let escaped: Vec<String> = normalized_segments(destination)
        .iter()
        .map(|segment| escape_gitignore(segment))
        .collect();
    format!("/{}", escaped.join("/"))
}

fn escape_gitignore(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        if matches!(c, '\\' | '[' | ']' | '*' | '?') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    let trailing = escaped.len() - escaped.trim_end_matches(' ').len();
    if trailing > 0 {
        escaped.truncate(escaped.len() - trailing);
        escaped.push_str(&"\\ ".repeat(trailing));
    }
    escaped
}
