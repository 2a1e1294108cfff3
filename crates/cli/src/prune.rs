//! Prune run: list, plan, and execute deletions

use anyhow::Result;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use retention::{build_plan, list_snapshots, RetentionPolicy, SnapshotDeleter, SnapshotRef};
use std::path::PathBuf;

/// Everything one prune run needs, resolved from the CLI flags
#[derive(Debug, Clone)]
pub struct PruneConfig {
    /// Directory holding the snapshot entries
    pub snapshot_path: PathBuf,
    /// strftime pattern for the trailing path segment of each entry
    pub name_format: String,
    /// Reference time the snapshot ages are computed against
    pub now: NaiveDateTime,
    /// Age thresholds for the weekly and monthly tiers
    pub policy: RetentionPolicy,
    /// Log deletions without executing them
    pub dry_run: bool,
}

/// Counts from one prune run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PruneReport {
    /// Snapshots the plan scheduled for deletion
    pub planned: usize,
    /// Deletions the backend confirmed
    pub deleted: usize,
    /// Deletions the backend reported as failed
    pub failed: usize,
}

/// Run one prune pass over the snapshot directory.
///
/// The monthly tier is swept in full before the weekly tier. A failed
/// deletion is logged and the sweep moves on; only a listing failure aborts
/// the run.
pub fn run<D: SnapshotDeleter>(config: &PruneConfig, deleter: &mut D) -> Result<PruneReport> {
    // 1. Enumerate candidates
    let entries = list_snapshots(&config.snapshot_path)?;

    // 2. Classify, bucket, and pick survivors
    let plan = build_plan(&entries, &config.name_format, config.now, &config.policy);
    tracing::debug!(
        "planned {} deletion(s), kept {} survivor(s), {} fresh, {} skipped",
        plan.len(),
        plan.survivors,
        plan.fresh,
        plan.skipped
    );

    if plan.is_empty() {
        println!("{}", "No snapshots to retire".dimmed());
        return Ok(PruneReport::default());
    }

    // 3. Sweep, monthly tier first
    let mut report = PruneReport {
        planned: plan.len(),
        ..Default::default()
    };
    sweep_tier(&plan.monthly, config.dry_run, deleter, &mut report);
    sweep_tier(&plan.weekly, config.dry_run, deleter, &mut report);

    // 4. Summary
    println!();
    if config.dry_run {
        println!(
            "{}",
            format!("Dry run - {} snapshot(s) would be deleted", report.planned).bold()
        );
    } else {
        println!("{}", "Prune complete".green().bold());
        println!("Snapshots deleted: {}", report.deleted.to_string().yellow());
        if report.failed > 0 {
            println!("Deletions failed:  {}", report.failed.to_string().red());
        }
    }

    Ok(report)
}

fn sweep_tier<D: SnapshotDeleter>(
    victims: &[SnapshotRef],
    dry_run: bool,
    deleter: &mut D,
    report: &mut PruneReport,
) {
    for snapshot in victims {
        println!("Deleting snapshot {}", snapshot.path.display());
        if dry_run {
            println!("{}", "Noop".dimmed());
            continue;
        }

        match deleter.delete(&snapshot.path) {
            Ok(()) => report.deleted += 1,
            Err(err) => {
                tracing::warn!("Failed to delete {}: {}", snapshot.path.display(), err);
                report.failed += 1;
            }
        }
    }
}
