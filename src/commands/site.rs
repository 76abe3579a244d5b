//! Site configuration command implementation

use std::path::Path;

use serde::Serialize;

use crate::cli::SiteConfigArgs;
use crate::config::{SiteConfig, SyncConfig};
use crate::error::{PscodeError, Result};

/// Print the site configuration, or one language registration with `--resolve`
pub fn run(
    project: Option<&Path>,
    config_file: Option<&Path>,
    args: &SiteConfigArgs,
) -> Result<()> {
    println!("{}", render(project, config_file, args)?);
    Ok(())
}

fn render(
    project: Option<&Path>,
    config_file: Option<&Path>,
    args: &SiteConfigArgs,
) -> Result<String> {
    let root = super::project_root(project)?;
    let config = SyncConfig::load(&root, config_file, args.to_settings())?;
    let site = SiteConfig::build(&config.asset_dir, &config.subdirectory)?;

    match &args.resolve {
        Some(tag) => {
            let lang = site
                .language_for(tag)
                .ok_or_else(|| PscodeError::UnknownLanguage {
                    tag: tag.clone(),
                    known: known_tags(&site),
                })?;
            to_json(lang, args.compact)
        }
        None => to_json(&site, args.compact),
    }
}

fn known_tags(site: &SiteConfig) -> String {
    site.highlighter
        .langs
        .iter()
        .flat_map(|lang| std::iter::once(&lang.name).chain(&lang.aliases))
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_grammar() -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("lang/syntaxes");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("pscode.tmLanguage.json"),
            r#"{"scopeName":"source.pscode","patterns":[]}"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_render_full_config() {
        let temp = project_with_grammar();
        let json = render(Some(temp.path()), None, &SiteConfigArgs::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Common Pseudocode");
        assert_eq!(value["highlighter"]["langs"][0]["name"], "pscode");
        assert_eq!(value["highlighter"]["langs"][0]["scopeName"], "source.pscode");
    }

    #[test]
    fn test_render_compact_is_single_line() {
        let temp = project_with_grammar();
        let args = SiteConfigArgs {
            compact: true,
            ..Default::default()
        };
        let json = render(Some(temp.path()), None, &args).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_render_resolves_alias() {
        let temp = project_with_grammar();
        let args = SiteConfigArgs {
            resolve: Some("commonps".to_string()),
            ..Default::default()
        };
        let json = render(Some(temp.path()), None, &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "pscode");
    }

    #[test]
    fn test_render_unknown_tag() {
        let temp = project_with_grammar();
        let args = SiteConfigArgs {
            resolve: Some("python".to_string()),
            ..Default::default()
        };
        let err = render(Some(temp.path()), None, &args).unwrap_err();
        match err {
            PscodeError::UnknownLanguage { tag, known } => {
                assert_eq!(tag, "python");
                assert_eq!(known, "pscode, pseudocode, ps, pseudo, commonps");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_custom_asset_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("public/syntax");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("pscode.tmLanguage.json"), "{}").unwrap();

        let args = SiteConfigArgs {
            asset_dir: Some("public".into()),
            subdirectory: Some("syntax".to_string()),
            ..Default::default()
        };
        assert!(render(Some(temp.path()), None, &args).is_ok());
    }

    #[test]
    fn test_render_without_grammar() {
        let temp = TempDir::new().unwrap();
        let err = render(Some(temp.path()), None, &SiteConfigArgs::default()).unwrap_err();
        assert!(matches!(err, PscodeError::MissingAsset { .. }));
    }
}
