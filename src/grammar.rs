//! Grammar loading and highlighter registration
//!
//! The grammar is a TextMate-style JSON document. It is treated as opaque
//! data: the only requirement is a top-level object, so the canonical name
//! and aliases can be layered on top of it for the highlighter.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{PscodeError, Result};

/// A grammar document read from the asset directory
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarDocument {
    path: PathBuf,
    rules: Map<String, Value>,
}

impl GrammarDocument {
    /// Where the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level entries of the document, untouched
    pub fn rules(&self) -> &Map<String, Value> {
        &self.rules
    }

    /// The `scopeName` declared by the grammar, if any
    pub fn scope_name(&self) -> Option<&str> {
        self.rules.get("scopeName").and_then(Value::as_str)
    }
}

/// Load the grammar at `path`
///
/// A missing file is a hard failure: the documentation cannot be built
/// without the grammar, and the sync has to run first.
pub fn load_grammar(path: &Path) -> Result<GrammarDocument> {
    if !path.is_file() {
        return Err(PscodeError::MissingAsset {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| PscodeError::AssetRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| PscodeError::GrammarParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(rules) => {
            tracing::debug!(path = %path.display(), entries = rules.len(), "loaded grammar");
            Ok(GrammarDocument {
                path: path.to_path_buf(),
                rules,
            })
        }
        other => Err(PscodeError::GrammarParse {
            path: path.display().to_string(),
            reason: format!("expected an object at the top level, found {}", kind(&other)),
        }),
    }
}

/// A grammar registered under a canonical name and aliases
///
/// Serializes as the grammar's own entries followed by `name` and `aliases`,
/// which replace same-named entries of the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRegistration {
    pub name: String,
    pub aliases: Vec<String>,
    grammar: Map<String, Value>,
}

impl LanguageRegistration {
    /// The highlighter-facing document
    pub fn to_value(&self) -> Value {
        let mut merged = self.grammar.clone();
        merged.insert("name".to_string(), Value::String(self.name.clone()));
        merged.insert(
            "aliases".to_string(),
            Value::Array(self.aliases.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(merged)
    }

    /// Whether a fenced code block tagged `tag` selects this language
    pub fn matches(&self, tag: &str) -> bool {
        self.name == tag || self.aliases.iter().any(|alias| alias == tag)
    }
}

impl Serialize for LanguageRegistration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Register a grammar with the highlighter under `canonical_name` and `aliases`
///
/// Performs no validation of the grammar's rules; that is the highlighter's job.
/// The document itself is not modified.
pub fn register_language(
    doc: &GrammarDocument,
    canonical_name: &str,
    aliases: &[&str],
) -> LanguageRegistration {
    LanguageRegistration {
        name: canonical_name.to_string(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        grammar: doc.rules().clone(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
