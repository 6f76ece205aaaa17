use thiserror::Error;

/// Which certificate input failed PEM validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CredentialField {
    CaCertificate,
    ClientCertificate,
    ClientKey,
}

/// Invalid connection settings, detected before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Instance URL missing, unparsable, or not http(s).
    #[error("invalid instance URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A certificate or key input is not a well-formed PEM block.
    #[error("{field} is not a well-formed PEM block: {reason}")]
    InvalidCredentialFormat {
        field: CredentialField,
        reason: String,
    },

    /// Neither username/password nor client certificate/key were supplied.
    #[error(
        "no authentication configured: supply username and password, \
         or client certificate and client key"
    )]
    MissingAuthentication,

    /// Both authentication schemes were supplied.
    #[error(
        "conflicting authentication: username/password and client \
         certificate/key are mutually exclusive"
    )]
    ConflictingAuthentication,

    /// `reqwest` refused the TLS material or builder settings.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Top-level error type for the `scc-api` crate.
///
/// Covers configuration, connectivity, request and decoding failures.
/// `scc-core` maps these into reconciliation-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // ── Connectivity ────────────────────────────────────────────────
    /// The configure-time probe could not reach the connector.
    #[error("Cannot connect to Cloud Connector at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// The connector answered the probe with 401/403.
    #[error("Authentication rejected by Cloud Connector (HTTP {status})")]
    AuthenticationRejected { status: u16 },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, timeout, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Request ─────────────────────────────────────────────────────
    /// Non-2xx response. `body` is the server's diagnostic text, verbatim.
    #[error("Request failed (HTTP {status}): {body}")]
    Request { status: u16, body: String },

    /// 2xx response whose body does not match the expected shape.
    #[error("Decode error: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } | Self::AuthenticationRejected { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the server reported the target as absent.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_field_names_are_snake_case() {
        assert_eq!(CredentialField::CaCertificate.to_string(), "ca_certificate");
        assert_eq!(CredentialField::ClientKey.to_string(), "client_key");
    }

    #[test]
    fn request_error_keeps_server_text() {
        let err = Error::Request {
            status: 409,
            body: "Subaccount already exists".into(),
        };
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("Subaccount already exists"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected_from_status() {
        let err = Error::Request {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
    }
}
