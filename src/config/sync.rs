//! Sync configuration (pscode-syntax.yaml) and its layering
//!
//! Settings are resolved from three layers, lowest precedence first:
//! built-in defaults, the optional `pscode-syntax.yaml` in the project root,
//! and command line flags (which clap also fills from environment variables).

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PscodeError, Result};

/// Settings file looked up in the project root
pub const CONFIG_FILE: &str = "pscode-syntax.yaml";

/// Repository holding the upstream syntax bundle
pub const DEFAULT_REMOTE: &str = "https://github.com/adarshrkumar/pscode-syntax-highlighter";

/// Staging directory, relative to the project root
pub const DEFAULT_STAGING_DIR: &str = ".tmp-syntax";

/// Asset directory read by the documentation build, relative to the project root
pub const DEFAULT_ASSET_DIR: &str = "lang";

/// Top-level bundle files copied into the asset directory
pub const DEFAULT_FILES: &[&str] = &["example.pscode", "language-configuration.json"];

/// Bundle subdirectory whose entries are copied wholesale
pub const DEFAULT_SUBDIRECTORY: &str = "syntaxes";

/// Upper bound for the fetch step
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 120;

/// One layer of sync settings
///
/// Every field is optional so layers can be stacked with [`SyncSettings::merge`].
/// The same shape is read from `pscode-syntax.yaml` and built from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SyncSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<String>,

    /// Fetch timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout: Option<u64>,
}

impl SyncSettings {
    /// Read settings from a file, attributing errors to its path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PscodeError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PscodeError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn merge(self, other: SyncSettings) -> SyncSettings {
        SyncSettings {
            remote: other.remote.or(self.remote),
            staging_dir: other.staging_dir.or(self.staging_dir),
            asset_dir: other.asset_dir.or(self.asset_dir),
            files: other.files.or(self.files),
            subdirectory: other.subdirectory.or(self.subdirectory),
            fetch_timeout: other.fetch_timeout.or(self.fetch_timeout),
        }
    }
}

/// Effective configuration of one sync run
///
/// All paths are absolute, resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Project root the relative paths were resolved against
    pub project_root: PathBuf,
    /// Remote bundle location (git URL or local directory)
    pub remote: String,
    pub staging_dir: PathBuf,
    pub asset_dir: PathBuf,
    pub files: Vec<String>,
    pub subdirectory: String,
    pub fetch_timeout: Duration,
}

impl SyncConfig {
    /// Configuration with only the built-in defaults applied
    pub fn defaults(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            remote: DEFAULT_REMOTE.to_string(),
            staging_dir: project_root.join(DEFAULT_STAGING_DIR),
            asset_dir: project_root.join(DEFAULT_ASSET_DIR),
            files: DEFAULT_FILES.iter().map(ToString::to_string).collect(),
            subdirectory: DEFAULT_SUBDIRECTORY.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    /// Resolve the effective configuration for a project
    ///
    /// `config_file` overrides the default `pscode-syntax.yaml` lookup; an
    /// explicitly named file must exist, the default one is optional.
    pub fn load(
        project_root: &Path,
        config_file: Option<&Path>,
        overrides: SyncSettings,
    ) -> Result<Self> {
        let file_settings = match config_file {
            Some(path) => SyncSettings::from_file(&project_root.join(path))?,
            None => {
                let default_path = project_root.join(CONFIG_FILE);
                if default_path.is_file() {
                    SyncSettings::from_file(&default_path)?
                } else {
                    SyncSettings::default()
                }
            }
        };

        Self::from_settings(project_root, &file_settings.merge(overrides))
    }

    /// Apply a settings layer on top of the defaults and validate the result
    pub fn from_settings(project_root: &Path, settings: &SyncSettings) -> Result<Self> {
        let mut config = Self::defaults(project_root);

        if let Some(remote) = &settings.remote {
            config.remote = remote.trim().to_string();
        }
        if let Some(staging_dir) = &settings.staging_dir {
            config.staging_dir = project_root.join(staging_dir);
        }
        if let Some(asset_dir) = &settings.asset_dir {
            config.asset_dir = project_root.join(asset_dir);
        }
        if let Some(files) = &settings.files {
            config.files.clone_from(files);
        }
        if let Some(subdirectory) = &settings.subdirectory {
            config.subdirectory.clone_from(subdirectory);
        }
        if let Some(seconds) = settings.fetch_timeout {
            config.fetch_timeout = Duration::from_secs(seconds);
        }

        config.validate()?;
        Ok(config)
    }

    /// Path of the advisory lock held while a sync runs
    ///
    /// Sits next to the staging directory: `.tmp-syntax` locks `.tmp-syntax.lock`.
    pub fn lock_path(&self) -> PathBuf {
        let name = self
            .staging_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_STAGING_DIR.to_string());
        self.staging_dir.with_file_name(format!("{name}.lock"))
    }

    /// Destination of the copied subdirectory
    pub fn asset_subdirectory(&self) -> PathBuf {
        self.asset_dir.join(&self.subdirectory)
    }

    fn validate(&self) -> Result<()> {
        if self.remote.is_empty() {
            return invalid("remote must not be empty");
        }

        if self.fetch_timeout.is_zero() {
            return invalid("fetch-timeout must be at least one second");
        }

        if self.staging_dir.file_name().is_none() {
            return invalid(format!(
                "staging-dir must name a directory: {}",
                self.staging_dir.display()
            ));
        }

        // Cleanup removes the staging directory recursively, so it must never
        // overlap with the assets it feeds.
        let staging = normalize(&self.staging_dir);
        let assets = normalize(&self.asset_dir);
        if staging.starts_with(&assets) || assets.starts_with(&staging) {
            return invalid(format!(
                "staging-dir ({}) and asset-dir ({}) must not contain each other",
                self.staging_dir.display(),
                self.asset_dir.display()
            ));
        }

        for name in &self.files {
            if !is_plain_name(name) {
                return invalid(format!("file entry must be a plain file name: '{name}'"));
            }
        }

        if !is_plain_name(&self.subdirectory) {
            return invalid(format!(
                "subdirectory must be a plain directory name: '{}'",
                self.subdirectory
            ));
        }

        Ok(())
    }
}

fn invalid<T>(message: impl Into<String>) -> Result<T> {
    Err(PscodeError::ConfigInvalid {
        message: message.into(),
    })
}

/// A single normal path component: no separators, no `.`/`..`, not empty
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Lexically drop `.` components and fold `..` so containment checks are meaningful
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
