//! Prune planning: survivor selection per period bucket

use crate::{AgeTier, ParseOutcome, PeriodKey, RetentionPolicy, SnapshotRef, TierBuckets};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// Snapshots scheduled for removal, plus counts for reporting
#[derive(Debug, Default)]
pub struct PrunePlan {
    /// Monthly-tier victims, processed before the weekly tier
    pub monthly: Vec<SnapshotRef>,
    /// Weekly-tier victims
    pub weekly: Vec<SnapshotRef>,
    /// Snapshots kept as period survivors
    pub survivors: usize,
    /// Snapshots younger than the weekly threshold, left untouched
    pub fresh: usize,
    /// Entries whose name did not parse as a timestamp
    pub skipped: usize,
}

impl PrunePlan {
    /// Total number of snapshots scheduled for deletion
    pub fn len(&self) -> usize {
        self.monthly.len() + self.weekly.len()
    }

    /// True when no deletions are scheduled
    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty() && self.weekly.is_empty()
    }
}

/// Build a prune plan for a directory listing.
///
/// Runs the full pipeline over `entries`: parse each name with `format`,
/// classify by age against `policy`, group into calendar buckets, and keep
/// the most recent snapshot of every bucket. Pure function of its inputs;
/// `now` is always caller-supplied.
pub fn build_plan(
    entries: &[PathBuf],
    format: &str,
    now: NaiveDateTime,
    policy: &RetentionPolicy,
) -> PrunePlan {
    let mut buckets = TierBuckets::default();
    let mut plan = PrunePlan::default();

    for path in entries {
        match crate::snapshot::parse_entry(path, format) {
            ParseOutcome::Snapshot(snapshot) => {
                match AgeTier::classify(&snapshot, now, policy) {
                    AgeTier::Ignored => plan.fresh += 1,
                    tier => buckets.insert(snapshot, tier),
                }
            }
            ParseOutcome::Skipped(reason) => {
                debug!("skipping {}: {:?}", path.display(), reason);
                plan.skipped += 1;
            }
        }
    }

    plan.monthly = select_victims(buckets.monthly, &mut plan.survivors);
    plan.weekly = select_victims(buckets.weekly, &mut plan.survivors);
    plan
}

/// Keep the most recent snapshot of every bucket; the rest are victims.
///
/// Recency is decided by the parsed timestamp, with the path string as a
/// tie-break for snapshots sharing one. For name formats that sort
/// lexicographically in time order this matches a plain name sort.
fn select_victims(
    buckets: BTreeMap<PeriodKey, Vec<SnapshotRef>>,
    survivors: &mut usize,
) -> Vec<SnapshotRef> {
    let mut victims = Vec::new();
    for mut group in buckets.into_values() {
        group.sort_by(|a, b| (a.timestamp, &a.path).cmp(&(b.timestamp, &b.path)));
        group.pop();
        *survivors += 1;
        victims.extend(group);
    }
    victims
}
