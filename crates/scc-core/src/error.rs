// ── Core error types ──
//
// Errors returned to the host from every lifecycle entry point. Transport
// failures from `scc-api` are translated into these variants by the
// `From<scc_api::Error>` impl; reconciliation failures originate here.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(#[source] scc_api::ConfigError),

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to Cloud Connector at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication rejected by Cloud Connector (HTTP {status})")]
    AuthenticationRejected { status: u16 },

    #[error("HTTP transport error: {message}")]
    Transport { message: String },

    // ── Request errors ───────────────────────────────────────────────
    /// Non-2xx response; `body` is the server's text, verbatim.
    #[error("Request failed (HTTP {status}): {body}")]
    Request { status: u16, body: String },

    /// 2xx response that does not match the expected shape.
    #[error("Unexpected response from Cloud Connector: {message}")]
    Decode { message: String, body: String },

    // ── Reconciliation errors ────────────────────────────────────────
    #[error("{kind} '{identifier}' not found")]
    NotFound {
        kind: &'static str,
        identifier: String,
    },

    /// The write succeeded but the new record cannot be located.
    #[error("{kind} with {key_name} '{natural_key}' not found after it was written")]
    ReconciliationFailure {
        kind: &'static str,
        key_name: &'static str,
        natural_key: String,
    },

    /// More than one sibling carries the natural key of the record.
    #[error("{count} {kind} records share {key_name} '{natural_key}'; cannot tell them apart")]
    DuplicateNaturalKey {
        kind: &'static str,
        key_name: &'static str,
        natural_key: String,
        count: usize,
    },

    /// An update tried to change a field that identifies the remote object.
    #[error("cannot change {field} of {kind} from '{prior}' to '{desired}'; the resource must be replaced")]
    IdentityMismatch {
        kind: &'static str,
        field: &'static str,
        prior: String,
        desired: String,
    },

    /// A server-assigned identifier is needed but the record does not carry one.
    #[error("{kind} has no {field}; read or import it first")]
    MissingIdentity {
        kind: &'static str,
        field: &'static str,
    },

    /// A field the connector requires on create was left empty.
    #[error("{kind} requires {field} on create")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("invalid import identifier '{got}' for {kind}: expected '{expected}'")]
    MalformedImportIdentifier {
        kind: &'static str,
        expected: String,
        got: String,
    },
}

impl CoreError {
    /// Returns `true` if the remote target is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Request { status: 404, .. }
        )
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } | Self::AuthenticationRejected { status } => Some(*status),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<scc_api::Error> for CoreError {
    fn from(err: scc_api::Error) -> Self {
        match err {
            scc_api::Error::Config(e) => CoreError::Config(e),
            scc_api::Error::ConnectionFailed { url, reason } => {
                CoreError::ConnectionFailed { url, reason }
            }
            scc_api::Error::AuthenticationRejected { status } => {
                CoreError::AuthenticationRejected { status }
            }
            scc_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Transport {
                        message: e.to_string(),
                    }
                }
            }
            scc_api::Error::InvalidUrl(e) => CoreError::Transport {
                message: format!("Invalid URL: {e}"),
            },
            scc_api::Error::Request { status, body } => CoreError::Request { status, body },
            scc_api::Error::Decode { message, body } => CoreError::Decode { message, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_keep_status_and_body() {
        let err = CoreError::from(scc_api::Error::Request {
            status: 400,
            body: "virtualPort must be numeric".into(),
        });
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("virtualPort must be numeric"));
    }

    #[test]
    fn http_404_counts_as_not_found() {
        let err = CoreError::from(scc_api::Error::Request {
            status: 404,
            body: String::new(),
        });
        assert!(err.is_not_found());
    }

    #[test]
    fn config_errors_pass_through() {
        let err = CoreError::from(scc_api::Error::Config(
            scc_api::ConfigError::ConflictingAuthentication,
        ));
        assert!(matches!(
            err,
            CoreError::Config(scc_api::ConfigError::ConflictingAuthentication)
        ));
    }
}
