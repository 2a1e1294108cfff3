//! btrfs subvolume deletion backend

use retention::{DeleteError, SnapshotDeleter};
use std::path::Path;
use std::process::Command;

/// Deletes snapshots by invoking `btrfs subvolume delete`.
#[derive(Debug, Default)]
pub struct BtrfsDeleter;

impl SnapshotDeleter for BtrfsDeleter {
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError> {
        let status = Command::new("/bin/btrfs")
            .arg("subvolume")
            .arg("delete")
            .arg(path)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(DeleteError::Failed(status))
        }
    }
}
