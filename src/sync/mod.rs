//! Asset synchronization
//!
//! One sync run:
//! 1. removes a stale staging directory left by an aborted run
//! 2. fetches the bundle into the staging directory
//! 3. ensures the asset directory exists
//! 4. copies the configured top-level files (missing ones are warnings)
//! 5. copies the entries of the configured subdirectory
//! 6. removes the staging directory
//!
//! Any fetch or copy error aborts the run. The staging directory is still
//! removed, best-effort: a cleanup failure on that path is logged and the
//! original error is returned. Files copied before the failure stay in place.

pub mod copy;
pub mod lock;
pub mod report;
pub mod staging;

use std::path::Path;

pub use report::{CopiedFile, CopyOutcome, SyncReport};

use crate::common::fs::ensure_dir;
use crate::config::SyncConfig;
use crate::error::{PscodeError, Result};
use crate::fetch::{self, BundleFetcher};
use lock::SyncLock;
use staging::StagingDir;

/// Phases of a sync run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    RemovedStale,
    Fetching,
    Fetched,
    CopyingFiles,
    CopyingSubdirectory,
    CleaningUp,
}

/// Receives progress notifications while a sync runs
///
/// Notifications are informational only; every method defaults to a no-op.
pub trait SyncObserver {
    fn on_step(&self, _step: SyncStep, _detail: &str) {}
    fn on_copied(&self, _file: &CopiedFile) {}
    fn on_missing(&self, _name: &str) {}
    fn on_skipped(&self, _name: &str) {}
    fn on_cleanup_failed(&self, _error: &PscodeError) {}
}

/// Observer that ignores all notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SyncObserver for SilentObserver {}

/// Run one sync of `config` using `fetcher`
pub fn sync(
    config: &SyncConfig,
    fetcher: &dyn BundleFetcher,
    observer: &dyn SyncObserver,
) -> Result<SyncReport> {
    let _lock = SyncLock::acquire(&config.lock_path())?;

    let (staging, removed_stale) = StagingDir::prepare(&config.staging_dir)?;
    if removed_stale {
        observer.on_step(SyncStep::RemovedStale, &config.staging_dir.display().to_string());
    }

    match populate(config, fetcher, staging.path(), observer) {
        Ok(report) => {
            observer.on_step(SyncStep::CleaningUp, "");
            staging.cleanup()?;
            tracing::info!(summary = %report.summary(), "sync complete");
            Ok(report)
        }
        Err(err) => {
            tracing::debug!(error = %err, "sync failed, removing staging directory");
            if let Err(cleanup_err) = staging.cleanup() {
                tracing::warn!(error = %cleanup_err, "could not clean up staging directory");
                observer.on_cleanup_failed(&cleanup_err);
            }
            Err(err)
        }
    }
}

/// Fetch into `staging` and copy the selected artifacts out of it
fn populate(
    config: &SyncConfig,
    fetcher: &dyn BundleFetcher,
    staging: &Path,
    observer: &dyn SyncObserver,
) -> Result<SyncReport> {
    let remote = fetch::resolve_remote(config);
    observer.on_step(SyncStep::Fetching, &remote);
    fetcher.fetch(&remote, staging)?;
    observer.on_step(SyncStep::Fetched, &remote);

    ensure_dir(&config.asset_dir)?;

    let mut report = SyncReport::default();

    observer.on_step(SyncStep::CopyingFiles, "");
    copy::copy_top_level_files(config, staging, observer, &mut report)?;

    copy::copy_subdirectory(config, staging, observer, &mut report)?;

    Ok(report)
}
