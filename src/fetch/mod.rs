//! Bundle fetchers
//!
//! A fetcher populates a destination directory with a snapshot of the remote
//! bundle, or fails. The destination does not exist beforehand.
//!
//! - [`GitFetcher`] clones a git remote (network or local repository)
//! - [`DirectoryFetcher`] copies a plain local directory, for offline use

mod directory;
mod git;

use std::path::{Path, PathBuf};

pub use directory::DirectoryFetcher;
pub use git::GitFetcher;

use crate::config::SyncConfig;
use crate::error::Result;

/// Capability to materialize a bundle snapshot on disk
pub trait BundleFetcher {
    /// Populate `dest` with a snapshot of the bundle at `remote`
    fn fetch(&self, remote: &str, dest: &Path) -> Result<()>;

    /// Short label used in progress output
    fn describe(&self) -> &'static str;
}

/// Pick the fetcher for the configured remote
///
/// A remote naming an existing directory without a `.git` entry is copied;
/// everything else goes through git.
pub fn for_config(config: &SyncConfig) -> Box<dyn BundleFetcher> {
    match local_bundle_dir(&config.project_root, &config.remote) {
        Some(dir) if !dir.join(".git").exists() => {
            tracing::debug!(dir = %dir.display(), "using directory fetcher");
            Box::new(DirectoryFetcher)
        }
        _ => Box::new(GitFetcher::new(config.fetch_timeout)),
    }
}

/// The remote as handed to the fetcher
///
/// Local paths are resolved against the project root so the fetch does not
/// depend on the working directory; URLs are returned unchanged.
pub fn resolve_remote(config: &SyncConfig) -> String {
    match local_bundle_dir(&config.project_root, &config.remote) {
        Some(dir) => dir.to_string_lossy().into_owned(),
        None => config.remote.clone(),
    }
}

fn local_bundle_dir(project_root: &Path, remote: &str) -> Option<PathBuf> {
    let path = crate::git::url::local_path(remote)?;
    let resolved = project_root.join(path);
    resolved.is_dir().then_some(resolved)
}
