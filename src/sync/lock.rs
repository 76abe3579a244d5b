//! Advisory lock serializing sync runs on one project

use std::path::Path;

use fslock::LockFile;

use crate::error::{PscodeError, Result};

/// RAII guard for the sync lock
///
/// Acquired without blocking: a second concurrent sync fails fast instead of
/// racing on the staging and asset directories. Released on drop.
///
/// The lock file itself stays behind. Unlinking it would let a process that
/// opened the old file and one that creates a new file both hold "the" lock.
#[derive(Debug)]
pub struct SyncLock {
    lock: LockFile,
}

impl SyncLock {
    pub fn acquire(lock_path: &Path) -> Result<Self> {
        if let Some(parent) = lock_path.parent() {
            crate::common::fs::ensure_dir(parent)?;
        }

        let mut lock = LockFile::open(lock_path).map_err(|e| PscodeError::LockFailed {
            path: lock_path.display().to_string(),
            reason: format!("Failed to open lock file: {e}"),
        })?;

        let acquired = lock.try_lock().map_err(|e| PscodeError::LockFailed {
            path: lock_path.display().to_string(),
            reason: format!("Failed to try lock: {e}"),
        })?;

        if !acquired {
            return Err(PscodeError::Locked {
                path: lock_path.display().to_string(),
            });
        }

        tracing::debug!(path = %lock_path.display(), "acquired sync lock");
        Ok(Self { lock })
    }
}

impl Drop for SyncLock {
    fn drop(&mut self) {
        let _ = self.lock.unlock();
    }
}
