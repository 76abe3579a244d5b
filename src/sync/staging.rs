//! The transient staging directory a bundle is fetched into

use std::path::{Path, PathBuf};

use crate::common::fs::remove_dir_if_exists;
use crate::error::Result;

/// Staging directory of one sync attempt
///
/// The directory must not exist when the fetch starts and must not exist when
/// the attempt ends. [`StagingDir::cleanup`] removes it explicitly and reports
/// failures; dropping an uncleaned guard removes it best-effort, which covers
/// early returns and panics.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
    armed: bool,
}

impl StagingDir {
    /// Prepare the staging area, removing a leftover from an aborted run
    ///
    /// Returns the guard and whether a stale directory was removed.
    pub fn prepare(path: &Path) -> Result<(Self, bool)> {
        let removed_stale = remove_dir_if_exists(path)?;
        if removed_stale {
            tracing::info!(path = %path.display(), "removed stale staging directory");
        }

        Ok((
            Self {
                path: path.to_path_buf(),
                armed: true,
            },
            removed_stale,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staging directory
    pub fn cleanup(mut self) -> Result<()> {
        self.armed = false;
        remove_dir_if_exists(&self.path).map(|_| ())
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = remove_dir_if_exists(&self.path) {
                tracing::warn!("{e}");
            }
        }
    }
}
