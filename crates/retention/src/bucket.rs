//! Calendar bucketing of classified snapshots

use crate::{AgeTier, SnapshotRef};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Grouping key for one retention period
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodKey {
    /// Calendar year (monthly tier) or ISO week-year (weekly tier)
    pub year: i32,
    /// Month number 1-12, or ISO week number 1-53
    pub period: u32,
}

impl PeriodKey {
    /// Monthly grouping: calendar year and month.
    pub fn monthly(snapshot: &SnapshotRef) -> Self {
        Self {
            year: snapshot.timestamp.year(),
            period: snapshot.timestamp.month(),
        }
    }

    /// Weekly grouping: ISO week-year and ISO week number.
    ///
    /// The ISO week-year can differ from the calendar year for dates around
    /// new year, so late-December and early-January snapshots sharing an ISO
    /// week land in the same bucket.
    pub fn weekly(snapshot: &SnapshotRef) -> Self {
        let week = snapshot.timestamp.iso_week();
        Self {
            year: week.year(),
            period: week.week(),
        }
    }
}

/// Per-tier buckets of snapshots grouped by retention period
#[derive(Debug, Default)]
pub struct TierBuckets {
    /// Monthly-tier snapshots keyed by (year, month)
    pub monthly: BTreeMap<PeriodKey, Vec<SnapshotRef>>,
    /// Weekly-tier snapshots keyed by (ISO week-year, ISO week)
    pub weekly: BTreeMap<PeriodKey, Vec<SnapshotRef>>,
}

impl TierBuckets {
    /// Append a classified snapshot to its tier bucket. Entries classified
    /// as too young never reach the buckets.
    pub fn insert(&mut self, snapshot: SnapshotRef, tier: AgeTier) {
        match tier {
            AgeTier::Monthly => self
                .monthly
                .entry(PeriodKey::monthly(&snapshot))
                .or_default()
                .push(snapshot),
            AgeTier::Weekly => self
                .weekly
                .entry(PeriodKey::weekly(&snapshot))
                .or_default()
                .push(snapshot),
            AgeTier::Ignored => {}
        }
    }
}
