//! BLAKE3 hashing utilities for change detection of synced assets

use std::fs::File;
use std::path::Path;

use blake3::Hasher;

use crate::error::{PscodeError, Result};

/// Prefix marking the digest algorithm
pub const HASH_PREFIX: &str = "blake3:";

/// Digest of a file's content, e.g. `blake3:af13...`
pub fn hash_file(path: &Path) -> Result<String> {
    let read_err = |e: std::io::Error| PscodeError::AssetRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let file = File::open(path).map_err(read_err)?;
    let mut hasher = Hasher::new();
    hasher.update_reader(file).map_err(read_err)?;

    Ok(format!("{HASH_PREFIX}{}", hasher.finalize().to_hex()))
}

/// Hash a file if it exists; `None` for a missing destination
pub fn hash_existing(path: &Path) -> Result<Option<String>> {
    if path.is_file() {
        hash_file(path).map(Some)
    } else {
        Ok(None)
    }
}
