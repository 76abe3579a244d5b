//! Error types and handling for pscode-syntax
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pscode-syntax operations
#[derive(Error, Diagnostic, Debug)]
pub enum PscodeError {
    // Fetch errors
    #[error("Failed to fetch syntax bundle from {remote}: {reason}")]
    #[diagnostic(
        code(pscode::fetch::failed),
        help("Check that the remote is correct and reachable, then run the sync again")
    )]
    Fetch { remote: String, reason: String },

    #[error("Fetching syntax bundle from {remote} timed out after {seconds}s")]
    #[diagnostic(
        code(pscode::fetch::timed_out),
        help("Raise the limit with --fetch-timeout or check your network connection")
    )]
    FetchTimedOut { remote: String, seconds: u64 },

    // Copy errors
    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(pscode::copy::failed))]
    Copy {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(code(pscode::copy::create_dir_failed))]
    CreateDir { path: String, reason: String },

    #[error("Failed to read directory {path}: {reason}")]
    #[diagnostic(code(pscode::copy::read_dir_failed))]
    ReadDir { path: String, reason: String },

    // Staging errors
    #[error("Failed to remove staging directory {path}: {reason}")]
    #[diagnostic(
        code(pscode::staging::cleanup_failed),
        help("Remove the directory manually; the next run also removes it before fetching")
    )]
    Cleanup { path: String, reason: String },

    #[error("Another sync is already running (lock held at {path})")]
    #[diagnostic(
        code(pscode::staging::locked),
        help("Wait for the other process to finish, then run the sync again")
    )]
    Locked { path: String },

    #[error("Failed to acquire sync lock at {path}: {reason}")]
    #[diagnostic(code(pscode::staging::lock_failed))]
    LockFailed { path: String, reason: String },

    // Build-time errors
    #[error("Syntax asset not found: {path}")]
    #[diagnostic(
        code(pscode::asset::missing),
        help("Run 'pscode-syntax sync' before building the documentation site")
    )]
    MissingAsset { path: String },

    #[error("Failed to read syntax asset {path}: {reason}")]
    #[diagnostic(code(pscode::asset::read_failed))]
    AssetRead { path: String, reason: String },

    #[error("Failed to parse grammar {path}: {reason}")]
    #[diagnostic(
        code(pscode::asset::grammar_parse_failed),
        help("The grammar must be a JSON document; re-run the sync to restore it")
    )]
    GrammarParse { path: String, reason: String },

    #[error("No language registered for fence tag '{tag}'")]
    #[diagnostic(
        code(pscode::site::unknown_language),
        help("Known tags: {known}")
    )]
    UnknownLanguage { tag: String, known: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(pscode::config::read_failed))]
    ConfigRead { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(pscode::config::parse_failed))]
    ConfigParse { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pscode::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(pscode::output::serialize_failed))]
    Serialize { reason: String },
}

impl From<serde_json::Error> for PscodeError {
    fn from(err: serde_json::Error) -> Self {
        PscodeError::Serialize {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PscodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PscodeError::MissingAsset {
            path: "lang/syntaxes/pscode.tmLanguage.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Syntax asset not found: lang/syntaxes/pscode.tmLanguage.json"
        );
    }

    #[test]
    fn test_error_code() {
        let err = PscodeError::MissingAsset {
            path: "x".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("pscode::asset::missing".to_string())
        );
    }

    #[test]
    fn test_fetch_error_includes_reason() {
        let err = PscodeError::Fetch {
            remote: "https://example.com/repo".to_string(),
            reason: "Repository not found".to_string(),
        };
        assert!(err.to_string().contains("https://example.com/repo"));
        assert!(err.to_string().contains("Repository not found"));
    }

    #[test]
    fn test_fetch_timed_out_error() {
        let err = PscodeError::FetchTimedOut {
            remote: "https://example.com/repo".to_string(),
            seconds: 5,
        };
        assert!(err.to_string().contains("timed out after 5s"));
    }

    #[test]
    fn test_cleanup_error_has_help() {
        let err = PscodeError::Cleanup {
            path: ".tmp-syntax".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.help().is_some());
        assert!(err.to_string().contains(".tmp-syntax"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PscodeError = parse_result.unwrap_err().into();
        assert!(matches!(err, PscodeError::Serialize { .. }));
    }
}
