//! Snapshot identification and age classification

use crate::RetentionPolicy;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::{Path, PathBuf};

/// A directory entry whose name parsed as a snapshot timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRef {
    /// Full path of the snapshot entry
    pub path: PathBuf,
    /// Creation time parsed from the final path segment
    pub timestamp: NaiveDateTime,
}

/// Age tier of a snapshot relative to the policy thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    /// Younger than the weekly threshold, left untouched
    Ignored,
    /// Thinned to one snapshot per ISO week
    Weekly,
    /// Thinned to one snapshot per calendar month
    Monthly,
}

impl AgeTier {
    /// Classify a snapshot by its whole-day age. An age exactly equal to a
    /// threshold does not qualify for that tier; the entry stays in the
    /// younger tier.
    pub fn classify(snapshot: &SnapshotRef, now: NaiveDateTime, policy: &RetentionPolicy) -> Self {
        let age_days = now.signed_duration_since(snapshot.timestamp).num_days();
        if age_days > policy.monthly_after_days {
            AgeTier::Monthly
        } else if age_days > policy.weekly_after_days {
            AgeTier::Weekly
        } else {
            AgeTier::Ignored
        }
    }
}

/// Outcome of inspecting one directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The name matched the timestamp format
    Snapshot(SnapshotRef),
    /// The entry is not a snapshot and takes no further part in the run
    Skipped(SkipReason),
}

/// Why an entry was excluded from retention processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Path has no usable final segment (e.g. ends in `..` or is not UTF-8)
    NoFileName,
    /// Final segment does not match the timestamp format
    FormatMismatch,
}

/// Try to parse a directory entry into a snapshot reference.
///
/// Only the final path segment is matched against `format`. A mismatch is an
/// expected condition (snapshot directories may hold unrelated entries) and
/// is reported as a [`SkipReason`] rather than an error.
pub fn parse_entry(path: &Path, format: &str) -> ParseOutcome {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return ParseOutcome::Skipped(SkipReason::NoFileName);
    };

    match parse_timestamp(name, format) {
        Some(timestamp) => ParseOutcome::Snapshot(SnapshotRef {
            path: path.to_path_buf(),
            timestamp,
        }),
        None => ParseOutcome::Skipped(SkipReason::FormatMismatch),
    }
}

/// Parse a snapshot name with a strftime format. Formats without time
/// components (e.g. `%Y-%m-%d`) resolve to midnight.
fn parse_timestamp(name: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(name, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(name, format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
