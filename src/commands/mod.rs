//! Command implementations for the pscode-syntax CLI

pub mod completions;
pub mod site;
pub mod sync;
pub mod version;

use std::path::{Path, PathBuf};

use crate::error::{PscodeError, Result};

/// Resolve the project root, defaulting to the current directory
pub(crate) fn project_root(project: Option<&Path>) -> Result<PathBuf> {
    let root = match project {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| PscodeError::ConfigInvalid {
            message: format!("cannot determine current directory: {e}"),
        })?,
    };

    dunce::canonicalize(&root).map_err(|e| PscodeError::ConfigInvalid {
        message: format!("project directory {} is not accessible: {e}", root.display()),
    })
}
