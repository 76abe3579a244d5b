//! Git-backed bundle fetcher with a bounded wait

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use super::BundleFetcher;
use crate::error::{PscodeError, Result};

/// Upper bound on the share of the timeout a cancelled clone gets to notice
const CANCEL_GRACE: Duration = Duration::from_secs(5);

/// Shallow-clones the bundle repository
///
/// The clone runs on a worker thread so the wait can be bounded. On expiry the
/// transfer is asked to stop and the fetch fails with `FetchTimedOut`. The
/// grace period for the cancellation is carved out of the timeout, so the
/// whole fetch never waits longer than configured.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    timeout: Duration,
}

impl GitFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Split the timeout into the transfer wait and the cancellation grace
    fn budget(&self) -> (Duration, Duration) {
        let grace = CANCEL_GRACE.min(self.timeout / 5);
        (self.timeout - grace, grace)
    }
}

impl BundleFetcher for GitFetcher {
    fn fetch(&self, remote: &str, dest: &Path) -> Result<()> {
        let cancel = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();

        let worker_cancel = Arc::clone(&cancel);
        let worker_remote = remote.to_string();
        let worker_dest = dest.to_path_buf();
        thread::Builder::new()
            .name("bundle-fetch".to_string())
            .spawn(move || {
                let result = crate::git::clone(&worker_remote, &worker_dest, true, &worker_cancel)
                    .map(|_| ());
                // The receiver is gone once the wait timed out.
                let _ = tx.send(result);
            })
            .map_err(|e| PscodeError::Fetch {
                remote: remote.to_string(),
                reason: format!("Failed to start fetch worker: {e}"),
            })?;

        let (wait, grace) = self.budget();
        match rx.recv_timeout(wait) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                cancel.store(true, Ordering::Relaxed);
                tracing::warn!(
                    remote,
                    seconds = self.timeout.as_secs(),
                    "fetch timed out, cancelling transfer"
                );
                let _ = rx.recv_timeout(grace);
                Err(PscodeError::FetchTimedOut {
                    remote: remote.to_string(),
                    seconds: self.timeout.as_secs(),
                })
            }
            Err(RecvTimeoutError::Disconnected) => Err(PscodeError::Fetch {
                remote: remote.to_string(),
                reason: "fetch worker exited unexpectedly".to_string(),
            }),
        }
    }

    fn describe(&self) -> &'static str {
        "Cloning"
    }
}
