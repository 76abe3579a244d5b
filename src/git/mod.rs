//! Git operations for fetching the syntax bundle
//!
//! This module handles:
//! - Shallow clones of the bundle repository (HTTPS and SSH)
//! - Cooperative cancellation of a running transfer
//! - Translating libgit2 failures into fetch errors
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Environment variables (`GIT_SSH_COMMAND`, etc.)

pub mod auth;
pub mod error;
pub mod url;

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use crate::error::{PscodeError, Result};

/// Clone `remote` into `target`
///
/// With `shallow`, only the tip revision is fetched (ignored for local remotes,
/// which do not support it). The transfer aborts as soon as `cancel` is set.
pub fn clone(
    remote: &str,
    target: &Path,
    shallow: bool,
    cancel: &Arc<AtomicBool>,
) -> Result<Repository> {
    let mut callbacks = RemoteCallbacks::new();
    auth::setup_auth_callbacks(&mut callbacks);

    let transfer_cancel = Arc::clone(cancel);
    callbacks.transfer_progress(move |progress| {
        tracing::trace!(
            received = progress.received_objects(),
            total = progress.total_objects(),
            "bundle transfer"
        );
        !transfer_cancel.load(Ordering::Relaxed)
    });

    let sideband_cancel = Arc::clone(cancel);
    callbacks.sideband_progress(move |_| !sideband_cancel.load(Ordering::Relaxed));

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if shallow && !url::is_local(remote) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    let normalized = url::normalize_for_clone(remote);
    tracing::debug!(remote = %normalized, target = %target.display(), shallow, "cloning bundle");

    builder
        .clone(normalized.as_ref(), target)
        .map_err(|e| PscodeError::Fetch {
            remote: remote.to_string(),
            reason: error::interpret_git_error(&e),
        })
}
