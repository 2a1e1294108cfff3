//! End-to-end prune runs against a real temporary snapshot directory

use chrono::{NaiveDate, NaiveDateTime};
use cli_lib::prune::{self, PruneConfig};
use retention::{DeleteError, RetentionPolicy, SnapshotDeleter};
use std::collections::BTreeSet;
use std::path::Path;

/// Backend that removes the snapshot directory itself, standing in for the
/// btrfs subvolume delete call.
struct DirDeleter;

impl SnapshotDeleter for DirDeleter {
    fn delete(&mut self, path: &Path) -> Result<(), DeleteError> {
        std::fs::remove_dir(path)?;
        Ok(())
    }
}

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn config_for(dir: &Path) -> PruneConfig {
    PruneConfig {
        snapshot_path: dir.to_path_buf(),
        name_format: "%Y-%m-%d-%H-%M".to_string(),
        now: fixed_now(),
        policy: RetentionPolicy::default(),
        dry_run: false,
    }
}

fn remaining_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_prune_thins_directory_and_second_run_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();

    // Monthly tier: three January snapshots, one February snapshot.
    // Weekly tier: two snapshots in the same ISO week.
    // One fresh snapshot and two non-snapshot entries.
    for name in [
        "2023-01-15-10-00",
        "2023-01-20-10-00",
        "2023-01-25-10-00",
        "2023-02-11-10-00",
        "2024-03-05-10-00",
        "2024-03-07-10-00",
        "2024-05-30-10-00",
        "not-a-snapshot",
    ] {
        std::fs::create_dir(dir.path().join(name)).unwrap();
    }
    std::fs::write(dir.path().join("README.md"), "snapshots live here\n").unwrap();

    let report = prune::run(&config_for(dir.path()), &mut DirDeleter).unwrap();
    assert_eq!(report.planned, 3);
    assert_eq!(report.deleted, 3);
    assert_eq!(report.failed, 0);

    // One survivor per period, fresh and unrelated entries untouched.
    let expected: BTreeSet<String> = [
        "2023-01-25-10-00",
        "2023-02-11-10-00",
        "2024-03-07-10-00",
        "2024-05-30-10-00",
        "not-a-snapshot",
        "README.md",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(remaining_names(dir.path()), expected);

    // Immediately re-running finds every bucket already thinned.
    let second = prune::run(&config_for(dir.path()), &mut DirDeleter).unwrap();
    assert_eq!(second.planned, 0);
    assert_eq!(second.deleted, 0);
    assert_eq!(remaining_names(dir.path()), expected);
}

#[test]
fn test_dry_run_leaves_directory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["2023-01-15-10-00", "2023-01-20-10-00", "2023-01-25-10-00"] {
        std::fs::create_dir(dir.path().join(name)).unwrap();
    }

    let config = PruneConfig {
        dry_run: true,
        ..config_for(dir.path())
    };
    let report = prune::run(&config, &mut DirDeleter).unwrap();

    assert_eq!(report.planned, 2);
    assert_eq!(report.deleted, 0);
    assert_eq!(remaining_names(dir.path()).len(), 3);
}

#[test]
fn test_missing_snapshot_directory_is_an_empty_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let config = PruneConfig {
        snapshot_path: missing,
        ..config_for(dir.path())
    };
    let report = prune::run(&config, &mut DirDeleter).unwrap();
    assert_eq!(report.planned, 0);
}
