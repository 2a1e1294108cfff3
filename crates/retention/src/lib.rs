//! Tiered snapshot retention engine
//!
//! This crate provides:
//! - Snapshot name parsing and age classification
//! - Calendar bucketing (one bucket per month or ISO week)
//! - Survivor selection and prune planning
//! - Snapshot directory listing
//! - The deletion-backend seam (trait + error type)

pub mod bucket;
pub mod list;
pub mod plan;
pub mod policy;
pub mod snapshot;
pub mod sweep;

// Re-exports
pub use bucket::{PeriodKey, TierBuckets};
pub use list::list_snapshots;
pub use plan::{build_plan, PrunePlan};
pub use policy::RetentionPolicy;
pub use snapshot::{AgeTier, ParseOutcome, SkipReason, SnapshotRef};
pub use sweep::{DeleteError, SnapshotDeleter};

/// Result type for retention operations
pub type Result<T> = anyhow::Result<T>;
