//! Outcome of a sync run

use std::fmt;

/// What happened to one destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The destination did not exist before
    Created,
    /// The destination existed with different content
    Updated,
    /// The destination already had identical content (still overwritten)
    Unchanged,
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        };
        f.write_str(label)
    }
}

/// A file copied into the asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// Path relative to the asset directory, with `/` separators
    pub name: String,
    pub outcome: CopyOutcome,
    /// BLAKE3 digest of the copied content
    pub digest: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub copied: Vec<CopiedFile>,
    /// Configured top-level files absent from the bundle
    pub missing: Vec<String>,
    /// Subdirectory entries that are not regular files
    pub skipped: Vec<String>,
    /// Whether the bundle contained the configured subdirectory
    pub subdirectory_found: bool,
}

impl SyncReport {
    pub fn count(&self, outcome: CopyOutcome) -> usize {
        self.copied.iter().filter(|f| f.outcome == outcome).count()
    }

    #[cfg(test)]
    pub fn find(&self, name: &str) -> Option<&CopiedFile> {
        self.copied.iter().find(|f| f.name == name)
    }

    /// One-line summary, e.g. `3 files synced (1 created, 0 updated, 2 unchanged), 1 missing`
    pub fn summary(&self) -> String {
        let total = self.copied.len();
        let mut line = format!(
            "{total} file{} synced ({} created, {} updated, {} unchanged)",
            if total == 1 { "" } else { "s" },
            self.count(CopyOutcome::Created),
            self.count(CopyOutcome::Updated),
            self.count(CopyOutcome::Unchanged),
        );
        if !self.missing.is_empty() {
            line.push_str(&format!(", {} missing", self.missing.len()));
        }
        line
    }
}
