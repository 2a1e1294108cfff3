//! Snapshot directory listing

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// List the direct entries under `path`, sorted ascending by path string.
///
/// A nonexistent directory yields an empty listing (nothing to retire). An
/// existing directory that cannot be read is an error; the run has no
/// meaningful work without a listing.
pub fn list_snapshots(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let dir = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read snapshot directory {}", path.display()))?;

    let mut entries = Vec::new();
    for entry in dir {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", path.display()))?;
        entries.push(entry.path());
    }

    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        let entries = list_snapshots(&missing).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_unlistable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("snapshots");
        std::fs::write(&file, "not a directory").unwrap();

        assert!(list_snapshots(&file).is_err());
    }

    #[test]
    fn test_entries_are_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2023-03-01-10-00", "2023-01-15-10-00", "config.toml"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }

        let entries = list_snapshots(dir.path()).unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["2023-01-15-10-00", "2023-03-01-10-00", "config.toml"]
        );
    }
}
