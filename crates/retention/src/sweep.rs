//! Deletion-backend seam

use std::path::Path;
use std::process::ExitStatus;
use thiserror::Error;

/// Error from the snapshot removal backend
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The removal command could not be run at all
    #[error("failed to run deletion command: {0}")]
    Io(#[from] std::io::Error),
    /// The removal command ran and reported failure
    #[error("deletion command exited with {0}")]
    Failed(ExitStatus),
}

/// Backend that removes a single snapshot.
///
/// Implementations perform the destructive call synchronously and report the
/// outcome; callers decide how to react. The sweep loop never aborts on a
/// failed deletion.
pub trait SnapshotDeleter {
    /// Remove the snapshot at `path`.
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError>;
}
