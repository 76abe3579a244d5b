//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{PscodeError, Result};

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    pub fn exclude_git() -> Self {
        Self {
            exclude: vec![".git".to_string()],
        }
    }

    fn is_excluded(&self, name: &std::ffi::OsStr) -> bool {
        self.exclude
            .iter()
            .any(|excluded| name.to_str() == Some(excluded.as_str()))
    }
}

/// Copy a directory tree, skipping excluded names at any depth
pub fn copy_dir_recursive(src: &Path, dst: &Path, options: &CopyOptions) -> Result<()> {
    ensure_dir(dst)?;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_excluded(entry.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| PscodeError::ReadDir {
            path: src.display().to_string(),
            reason: e.to_string(),
        })?;

        let relative = entry.path().strip_prefix(src).map_err(|e| PscodeError::ReadDir {
            path: entry.path().display().to_string(),
            reason: e.to_string(),
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Copy one file, overwriting the destination
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| PscodeError::Copy {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Create a directory and its parents if missing
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| PscodeError::CreateDir {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Recursively remove a directory; a missing directory is not an error
///
/// Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PscodeError::Cleanup {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
