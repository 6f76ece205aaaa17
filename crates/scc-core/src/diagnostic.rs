//! Host-facing diagnostics.
//!
//! Every lifecycle entry point either returns a record or a
//! [`Diagnostic`]: a severity, a one-line summary, and a detail string
//! that carries whatever the failing step knew (HTTP status, raw body,
//! offending field).

use serde::Serialize;
use strum::Display;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl From<&CoreError> for Diagnostic {
    fn from(err: &CoreError) -> Self {
        let summary = match err {
            CoreError::Config(_) => "Invalid provider configuration",
            CoreError::ConnectionFailed { .. } => "Cannot reach Cloud Connector",
            CoreError::AuthenticationRejected { .. } => "Cloud Connector rejected the credentials",
            CoreError::Transport { .. } => "HTTP transport error",
            CoreError::Request { .. } => "Cloud Connector request failed",
            CoreError::Decode { .. } => "Unexpected response from Cloud Connector",
            CoreError::NotFound { .. } => "Resource not found",
            CoreError::ReconciliationFailure { .. } => "Cannot locate resource after write",
            CoreError::DuplicateNaturalKey { .. } => "Ambiguous resource after write",
            CoreError::IdentityMismatch { .. } => "Identity field changed",
            CoreError::MissingIdentity { .. } | CoreError::MissingField { .. } => {
                "Incomplete resource"
            }
            CoreError::MalformedImportIdentifier { .. } => "Invalid import identifier",
        };

        let detail = match err {
            CoreError::Decode { message, body } if !body.is_empty() => {
                format!("{message}\nresponse body: {body}")
            }
            other => other.to_string(),
        };

        Self::error(summary, detail)
    }
}

impl From<CoreError> for Diagnostic {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}
