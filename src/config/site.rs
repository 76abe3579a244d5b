//! Documentation site configuration
//!
//! The site builder consumes this as declarative data: title, social links,
//! the highlighter languages and the sidebar tree. Building it requires the
//! synced grammar to be present in the asset directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::grammar::{self, LanguageRegistration};

/// Grammar file inside the synced subdirectory
pub const GRAMMAR_FILE: &str = "pscode.tmLanguage.json";

/// Identifier used for fenced code blocks
pub const CANONICAL_NAME: &str = "pscode";

/// Alternate fence tags, in match order
pub const ALIASES: &[&str] = &["pseudocode", "ps", "pseudo", "commonps"];

const SITE_TITLE: &str = "Common Pseudocode";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub social: Vec<SocialLink>,
    pub highlighter: Highlighter,
    pub sidebar: Vec<SidebarGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlighter {
    pub langs: Vec<LanguageRegistration>,
}

/// A sidebar group: either explicit pages or a directory to auto-discover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub label: String,
    #[serde(flatten)]
    pub contents: SidebarContents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarContents {
    Items(Vec<SidebarItem>),
    Autogenerate { directory: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub label: String,
    pub slug: String,
}

impl SiteConfig {
    /// Build the site configuration from the synced assets
    ///
    /// Fails with `MissingAsset` when the grammar has not been synced yet.
    pub fn build(asset_dir: &Path, subdirectory: &str) -> Result<Self> {
        let path = grammar_path(asset_dir, subdirectory);
        let doc = grammar::load_grammar(&path)?;
        tracing::debug!(
            path = %doc.path().display(),
            scope = doc.scope_name().unwrap_or("<none>"),
            rules = doc.rules().len(),
            "registering {CANONICAL_NAME} grammar"
        );

        Ok(Self {
            title: SITE_TITLE.to_string(),
            social: social_links(),
            highlighter: Highlighter {
                langs: vec![grammar::register_language(&doc, CANONICAL_NAME, ALIASES)],
            },
            sidebar: sidebar(),
        })
    }

    /// The registered language a fence tag selects, if any
    pub fn language_for(&self, tag: &str) -> Option<&LanguageRegistration> {
        self.highlighter.langs.iter().find(|lang| lang.matches(tag))
    }
}

/// Location of the grammar within the asset directory
pub fn grammar_path(asset_dir: &Path, subdirectory: &str) -> PathBuf {
    asset_dir.join(subdirectory).join(GRAMMAR_FILE)
}

fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            icon: "github".to_string(),
            label: "GitHub".to_string(),
            href: "https://github.com/adarshrkumar/CommonPS".to_string(),
        },
        SocialLink {
            icon: "vscode".to_string(),
            label: "Extension".to_string(),
            href: crate::config::sync::DEFAULT_REMOTE.to_string(),
        },
    ]
}

fn sidebar() -> Vec<SidebarGroup> {
    let mut groups = vec![SidebarGroup {
        label: "Start Here".to_string(),
        contents: SidebarContents::Items(vec![
            item("Introduction", "index"),
            item("Getting Started", "getting-started"),
        ]),
    }];

    groups.extend(
        [
            ("Basic Syntax", "basics"),
            ("Control Flow", "control-flow"),
            ("Data Structures", "data-structures"),
            ("Functions", "functions"),
            ("Examples", "examples"),
        ]
        .into_iter()
        .map(|(label, directory)| SidebarGroup {
            label: label.to_string(),
            contents: SidebarContents::Autogenerate {
                directory: directory.to_string(),
            },
        }),
    );

    groups
}

fn item(label: &str, slug: &str) -> SidebarItem {
    SidebarItem {
        label: label.to_string(),
        slug: slug.to_string(),
    }
}
