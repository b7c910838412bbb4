//! File-backed key-value storage for preference cells.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Maps string keys to JSON documents under a preferences directory,
/// one `<key>.json` file per key.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct PrefsStorage {
    /// Directory holding the per-key documents.
    dir: PathBuf,
}

impl PrefsStorage {
    /// Creates a storage handle rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the per-key documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Document path for a key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads the raw JSON document for a key.
    ///
    /// Any I/O error (including absence) yields `None`.
    #[must_use]
    pub fn read(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    /// Writes the raw JSON document for a key.
    ///
    /// Failures are logged and swallowed: the caller's in-memory value
    /// stays authoritative, only durability is lost.
    pub fn write(&self, key: &str, json: &str) {
        if let Err(error) = self.try_write(key, json) {
            tracing::warn!(key, %error, "failed to persist preference, keeping in-memory value");
        }
    }

    /// Creates the directory if needed and writes the document.
    fn try_write(&self, key: &str, json: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.key_path(key), json)
    }
}

/// Resolves the preferences directory.
///
/// - If `dir` is `Some`, returns `{dir}/prefs`.
/// - Otherwise returns `~/.local/share/flickdex/prefs`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when
/// `dir` is `None`).
pub fn resolve_prefs_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join("prefs"));
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("flickdex")
        .join("prefs"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_read_missing_key_returns_none() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let storage = PrefsStorage::new(dir.path());

        // Act & Assert
        assert_eq!(storage.read("theme"), None);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let storage = PrefsStorage::new(dir.path().join("prefs"));

        // Act
        storage.write("theme", "\"dark\"");

        // Assert
        assert_eq!(storage.read("theme").as_deref(), Some("\"dark\""));
        assert!(dir.path().join("prefs").join("theme.json").exists());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        // Arrange: the storage root is an existing file, so the
        // directory cannot be created
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "not a directory").unwrap();
        let storage = PrefsStorage::new(&blocked);

        // Act & Assert: does not panic, read still yields nothing
        storage.write("theme", "\"dark\"");
        assert_eq!(storage.read("theme"), None);
    }

    #[test]
    fn test_resolve_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/myproject");

        // Act
        let path = resolve_prefs_dir(Some(&dir)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/myproject/prefs"));
    }

    #[test]
    fn test_resolve_default() {
        // Arrange & Act
        let path = resolve_prefs_dir(None).unwrap();

        // Assert
        assert!(path.ends_with(".local/share/flickdex/prefs"));
    }
}
