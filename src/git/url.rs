//! Remote URL handling for bundle clones
//!
//! libgit2 is picky about two URL shapes: SCP-style SSH remotes
//! (`git@host:owner/repo`) and `file://` URLs without an absolute path.
//! Both are rewritten into forms it resolves reliably.

use std::borrow::Cow;
use std::path::Path;

/// Rewrite a remote into the form handed to libgit2
pub fn normalize_for_clone(url: &str) -> Cow<'_, str> {
    match normalize_scp_ssh(url) {
        Cow::Borrowed(url) => normalize_file_url(url),
        Cow::Owned(url) => Cow::Owned(url),
    }
}

/// Whether the remote lives on the local filesystem
///
/// Local transports do not support shallow fetches.
pub fn is_local(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || Path::new(url).is_absolute()
}

/// Filesystem path of a `file://` URL, or the remote itself when it is a plain path
pub fn local_path(url: &str) -> Option<&Path> {
    if let Some(rest) = url.strip_prefix("file://") {
        return Some(Path::new(rest));
    }
    if url.contains("://") || is_scp_ssh(url) {
        return None;
    }
    Some(Path::new(url))
}

fn is_scp_ssh(url: &str) -> bool {
    url.starts_with("git@") && !url.starts_with("ssh://")
}

/// `git@host:owner/repo.git` -> `ssh://git@host/owner/repo.git`
fn normalize_scp_ssh(url: &str) -> Cow<'_, str> {
    if !is_scp_ssh(url) {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host, path)) if path.starts_with('/') => Cow::Owned(format!("ssh://{host}{path}")),
        Some((host, path)) => Cow::Owned(format!("ssh://{host}/{path}")),
        None => Cow::Borrowed(url),
    }
}

/// `file://relative` and `file://C:\dir` style URLs -> `file:///...`
fn normalize_file_url(url: &str) -> Cow<'_, str> {
    let Some(after) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };

    if after.contains('\\') {
        return Cow::Owned(format!("file:///{}", after.replace('\\', "/")));
    }
    if !after.is_empty() && !after.starts_with('/') {
        return Cow::Owned(format!("file:///{after}"));
    }
    Cow::Borrowed(url)
}
