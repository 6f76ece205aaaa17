//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and config failures into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use scc_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to Cloud Connector at {url}")]
    #[diagnostic(
        code(scc::connection_failed),
        help(
            "Check that the connector is running and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication rejected (HTTP {status})")]
    #[diagnostic(
        code(scc::auth_failed),
        help(
            "Verify the username and password, or the client certificate and key.\n\
             Set SCC_USERNAME / SCC_PASSWORD, or SCC_CLIENT_CERTIFICATE / SCC_CLIENT_KEY."
        )
    )]
    AuthFailed { status: u16 },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{kind} '{identifier}' not found")]
    #[diagnostic(
        code(scc::not_found),
        help("Run: scc list --help to see what is configured")
    )]
    NotFound { kind: String, identifier: String },

    #[error("{summary}")]
    #[diagnostic(code(scc::conflict), help("{detail}"))]
    Conflict { summary: String, detail: String },

    #[error("{summary}")]
    #[diagnostic(code(scc::operation_failed), help("{detail}"))]
    Operation { summary: String, detail: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid import identifier for {kind}: '{got}'")]
    #[diagnostic(code(scc::import), help("Expected: {expected}"))]
    InvalidImport {
        kind: String,
        expected: String,
        got: String,
    },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(
        code(scc::validation),
        help("Check the value in the config file (see: scc config path).")
    )]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Invalid connection settings")]
    #[diagnostic(
        code(scc::settings),
        help(
            "Provide exactly one of username+password or client certificate+key.\n\
             See: scc config show"
        )
    )]
    Settings(#[source] scc_core::CoreError),

    #[error(transparent)]
    #[diagnostic(
        code(scc::config),
        help("Check the config file (see: scc config path) and SCC_* variables.")
    )]
    Config(Box<scc_config::ConfigError>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON record: {0}")]
    #[diagnostic(code(scc::json), help("Check the record file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML record: {0}")]
    #[diagnostic(code(scc::yaml), help("Check the record file contents and try again."))]
    Yaml(#[from] serde_yaml::Error),
}

impl From<scc_config::ConfigError> for CliError {
    fn from(err: scc_config::ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::InvalidImport { .. }
            | Self::Validation { .. }
            | Self::Settings(_)
            | Self::Config(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let diagnostic = scc_core::Diagnostic::from(&err);
        match err {
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::AuthenticationRejected { status } => CliError::AuthFailed { status },

            CoreError::NotFound { kind, identifier } => CliError::NotFound {
                kind: kind.into(),
                identifier,
            },

            CoreError::Request { status: 404, .. } => CliError::NotFound {
                kind: "resource".into(),
                identifier: diagnostic.detail,
            },

            CoreError::MalformedImportIdentifier {
                kind,
                expected,
                got,
            } => CliError::InvalidImport {
                kind: kind.into(),
                expected,
                got,
            },

            CoreError::Config(_) => CliError::Settings(err),

            CoreError::IdentityMismatch { .. }
            | CoreError::DuplicateNaturalKey { .. }
            | CoreError::Request { status: 409, .. } => CliError::Conflict {
                summary: diagnostic.summary,
                detail: diagnostic.detail,
            },

            _ => CliError::Operation {
                summary: diagnostic.summary,
                detail: diagnostic.detail,
            },
        }
    }
}
