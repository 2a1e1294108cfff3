//! Snapsweep CLI - snapsweep command

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;

use cli_lib::btrfs::BtrfsDeleter;
use cli_lib::prune::{self, PruneConfig};
use retention::RetentionPolicy;

/// Removes btrfs subvolumes/snapshots under a tiered retention policy:
/// snapshots older than the monthly threshold keep one per calendar month,
/// snapshots older than the weekly threshold keep one per ISO week, and
/// younger snapshots are left untouched.
#[derive(Parser)]
#[command(name = "snapsweep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path with the btrfs snapshots/subvolumes
    #[arg(long, default_value = "/home/.snapshots")]
    snapshot_path: PathBuf,

    /// Name format of the snapshots/subvolumes (strftime pattern)
    #[arg(long, default_value = "%Y-%m-%d-%H-%M")]
    snapshot_name_format: String,

    /// Keep one snapshot per ISO week once older than this many days
    #[arg(long, default_value_t = 30)]
    weekly_after: i64,

    /// Keep one snapshot per calendar month once older than this many days
    #[arg(long, default_value_t = 365)]
    monthly_after: i64,

    /// Log deletions without executing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let policy = RetentionPolicy {
        weekly_after_days: cli.weekly_after,
        monthly_after_days: cli.monthly_after,
    };
    policy.validate()?;

    let config = PruneConfig {
        snapshot_path: cli.snapshot_path,
        name_format: cli.snapshot_name_format,
        now: Local::now().naive_local(),
        policy,
        dry_run: cli.dry_run,
    };

    // Individual deletion failures are reported in the run output and do not
    // affect the exit code; only a failed listing or bad thresholds do.
    let mut deleter = BtrfsDeleter;
    prune::run(&config, &mut deleter)?;
    Ok(())
}
