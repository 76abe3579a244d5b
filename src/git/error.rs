//! Git error interpretation
//!
//! libgit2 messages are terse and transport-specific. They are mapped to a
//! small set of categories an operator can act on.

use git2::{Error, ErrorClass, ErrorCode};

/// Why a clone failed, as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneFailure {
    RepositoryNotFound,
    AuthenticationFailed,
    PermissionDenied,
    Network,
    Certificate,
    Ssl,
    Cancelled,
    Other,
}

impl CloneFailure {
    /// Classify a libgit2 error; specific patterns are checked before generic ones
    pub fn classify(err: &Error) -> Self {
        if err.code() == ErrorCode::User {
            return Self::Cancelled;
        }

        let msg = err.message().to_lowercase();
        let class = err.class();

        if msg.contains("not found")
            || msg.contains("404")
            || msg.contains("too many redirects")
            || msg.contains("authentication replays")
        {
            Self::RepositoryNotFound
        } else if msg.contains("authentication") || msg.contains("credentials") {
            Self::AuthenticationFailed
        } else if msg.contains("permission denied") || msg.contains("access denied") {
            Self::PermissionDenied
        } else if ["connection", "network", "timeout", "timed out", "resolve address"]
            .iter()
            .any(|needle| msg.contains(needle))
        {
            Self::Network
        } else if class == ErrorClass::Http && msg.contains("certificate") {
            Self::Certificate
        } else if class == ErrorClass::Http && msg.contains("ssl") {
            Self::Ssl
        } else {
            Self::Other
        }
    }
}

/// User-facing description of a libgit2 error
pub fn interpret_git_error(err: &Error) -> String {
    match CloneFailure::classify(err) {
        CloneFailure::RepositoryNotFound => "Repository not found".to_string(),
        CloneFailure::AuthenticationFailed => "Authentication failed".to_string(),
        CloneFailure::PermissionDenied => "Permission denied".to_string(),
        CloneFailure::Network => format!("Network error: {}", err.message()),
        CloneFailure::Certificate => "Certificate error".to_string(),
        CloneFailure::Ssl => "SSL error".to_string(),
        CloneFailure::Cancelled => "Transfer cancelled".to_string(),
        CloneFailure::Other => match err.class() {
            ErrorClass::Http => format!("HTTP error: {}", err.message()),
            ErrorClass::Ssh => format!("SSH error: {}", err.message()),
            _ => err.message().to_string(),
        },
    }
}
