//! Common test utilities for pscode-syntax integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const GRAMMAR: &str = r##"{
  "name": "PSCode",
  "scopeName": "source.pscode",
  "patterns": [{ "include": "source.pscode#keywords" }],
  "repository": {
    "keywords": { "match": "\\b(IF|THEN|ELSE|ENDIF|OUTPUT)\\b", "name": "keyword.control.pscode" }
  }
}"##;

pub const LANGUAGE_CONFIGURATION: &str = r#"{"comments":{"lineComment":"//"}}"#;

pub const EXAMPLE: &str = "OUTPUT \"Hello, world\"\n";

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn pscode_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pscode-syntax").unwrap();
    cmd.env_remove("PSCODE_SYNTAX_REMOTE")
        .env_remove("PSCODE_SYNTAX_PROJECT")
        .env_remove("RUST_LOG");
    cmd
}

/// A documentation project with a syntax bundle next to it
pub struct TestProject {
    pub temp: TempDir,
    /// Project root the command runs in
    pub path: PathBuf,
    /// Plain directory holding the bundle
    pub bundle: PathBuf,
}

impl TestProject {
    /// A project whose bundle has every synced file
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("site");
        let bundle = temp.path().join("pscode-syntax-highlighter");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");

        let project = Self { temp, path, bundle };
        project.write_bundle_file("example.pscode", EXAMPLE);
        project.write_bundle_file("language-configuration.json", LANGUAGE_CONFIGURATION);
        project.write_bundle_file("syntaxes/pscode.tmLanguage.json", GRAMMAR);
        project.write_bundle_file("package.json", r#"{"name":"pscode"}"#);
        project
    }

    /// Sync command preconfigured for this project and its bundle
    pub fn sync_cmd(&self) -> Command {
        let mut cmd = pscode_cmd();
        cmd.current_dir(&self.path)
            .arg("--remote")
            .arg(&self.bundle);
        cmd
    }

    /// Command running in the project root
    pub fn cmd(&self) -> Command {
        let mut cmd = pscode_cmd();
        cmd.current_dir(&self.path);
        cmd
    }

    pub fn write_bundle_file(&self, path: &str, content: &str) {
        write(&self.bundle.join(path), content);
    }

    pub fn remove_bundle_file(&self, path: &str) {
        std::fs::remove_file(self.bundle.join(path)).expect("Failed to remove bundle file");
    }

    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Turn the bundle into a git repository with one commit
    ///
    /// Returns a `file://` URL for it.
    pub fn commit_bundle(&self) -> String {
        init_repository(&self.bundle);
        format!("file://{}", self.bundle.display())
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Initialize a repository at `dir` and commit everything in it
pub fn init_repository(dir: &Path) {
    let repo = git2::Repository::init(dir).expect("Failed to init repository");
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = git2::Signature::now("Test", "test@example.com").expect("Failed to create signature");
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .expect("Failed to commit");
}
