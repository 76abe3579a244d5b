//! Fetcher for bundles that already sit on the local filesystem

use std::path::Path;

use super::BundleFetcher;
use crate::common::fs::{CopyOptions, copy_dir_recursive};
use crate::error::{PscodeError, Result};

/// Copies a local bundle directory into the staging area, minus `.git`
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryFetcher;

impl BundleFetcher for DirectoryFetcher {
    fn fetch(&self, remote: &str, dest: &Path) -> Result<()> {
        let source = crate::git::url::local_path(remote)
            .filter(|path| path.is_dir())
            .ok_or_else(|| PscodeError::Fetch {
                remote: remote.to_string(),
                reason: "Bundle directory not found".to_string(),
            })?;

        tracing::debug!(source = %source.display(), dest = %dest.display(), "copying bundle");
        copy_dir_recursive(source, dest, &CopyOptions::exclude_git()).map_err(|e| {
            PscodeError::Fetch {
                remote: remote.to_string(),
                reason: e.to_string(),
            }
        })
    }

    fn describe(&self) -> &'static str {
        "Copying"
    }
}
