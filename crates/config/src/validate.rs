//! Configuration validation.
//!
//! Checks the loaded config before the gateway is constructed so a broken
//! base URL fails at startup instead of on the first command.

use crate::schema::KyomikoConfig;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted field path, e.g. "server".
    pub path: &'static str,
    pub message: String,
}

/// Validate a loaded config.
///
/// `server` must be a non-empty http(s) URL. A missing credential is only
/// a warning: the backend may accept unauthenticated calls in development.
#[must_use]
pub fn validate(config: &KyomikoConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if config.server.is_empty() {
        diagnostics.push(Diagnostic {
            severity: Severity::Error,
            path: "server",
            message: "backend base URL is required".to_string(),
        });
    } else {
        match url::Url::parse(&config.server) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {},
            Ok(parsed) => diagnostics.push(Diagnostic {
                severity: Severity::Error,
                path: "server",
                message: format!("unsupported URL scheme \"{}\"", parsed.scheme()),
            }),
            Err(e) => diagnostics.push(Diagnostic {
                severity: Severity::Error,
                path: "server",
                message: format!("invalid backend base URL: {e}"),
            }),
        }
    }

    if config.authorization.is_none() {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            path: "authorization",
            message: "no credential configured; backend calls go out unauthenticated"
                .to_string(),
        });
    }

    diagnostics
}

/// Returns `true` if any diagnostic is an error.
#[must_use]
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}
