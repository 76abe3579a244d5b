//! Selective copy from the staging directory into the asset directory
//!
//! Copies always overwrite the destination with the source. Files missing from
//! the bundle leave previously synced copies in place.

use std::fs;
use std::path::Path;

use super::{SyncObserver, SyncStep};
use super::report::{CopiedFile, CopyOutcome, SyncReport};
use crate::common::fs::{copy_file, ensure_dir};
use crate::config::SyncConfig;
use crate::error::{PscodeError, Result};
use crate::hash;

/// Copy the configured top-level files that exist in the bundle
pub fn copy_top_level_files(
    config: &SyncConfig,
    staging: &Path,
    observer: &dyn SyncObserver,
    report: &mut SyncReport,
) -> Result<()> {
    for name in &config.files {
        let source = staging.join(name);
        if !source.is_file() {
            tracing::debug!(file = %name, "not present in bundle");
            observer.on_missing(name);
            report.missing.push(name.clone());
            continue;
        }

        let copied = copy_tracked(&source, &config.asset_dir.join(name), name.clone())?;
        observer.on_copied(&copied);
        report.copied.push(copied);
    }

    Ok(())
}

/// Copy every regular file directly inside the configured subdirectory
///
/// A bundle without the subdirectory is fine: there is nothing to copy.
/// Nested directories are not descended into and are reported as skipped.
pub fn copy_subdirectory(
    config: &SyncConfig,
    staging: &Path,
    observer: &dyn SyncObserver,
    report: &mut SyncReport,
) -> Result<()> {
    let source_dir = staging.join(&config.subdirectory);
    if !source_dir.is_dir() {
        tracing::debug!(subdirectory = %config.subdirectory, "not present in bundle");
        return Ok(());
    }
    report.subdirectory_found = true;
    observer.on_step(SyncStep::CopyingSubdirectory, &config.subdirectory);

    let dest_dir = config.asset_subdirectory();
    ensure_dir(&dest_dir)?;

    for entry in sorted_entries(&source_dir)? {
        let file_name = entry.file_name();
        let name = format!("{}/{}", config.subdirectory, file_name.to_string_lossy());

        if !entry.path().is_file() {
            tracing::debug!(entry = %name, "skipping non-file entry");
            observer.on_skipped(&name);
            report.skipped.push(name);
            continue;
        }

        let copied = copy_tracked(&entry.path(), &dest_dir.join(&file_name), name)?;
        observer.on_copied(&copied);
        report.copied.push(copied);
    }

    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let read_err = |e: std::io::Error| PscodeError::ReadDir {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}

/// Overwrite `to` with `from`, classifying the change by content digest
fn copy_tracked(from: &Path, to: &Path, name: String) -> Result<CopiedFile> {
    let digest = hash::hash_file(from)?;
    let outcome = match hash::hash_existing(to)? {
        None => CopyOutcome::Created,
        Some(existing) if existing == digest => CopyOutcome::Unchanged,
        Some(_) => CopyOutcome::Updated,
    };

    copy_file(from, to)?;
    tracing::debug!(file = %name, %outcome, %digest, "copied");

    Ok(CopiedFile {
        name,
        outcome,
        digest,
    })
}
