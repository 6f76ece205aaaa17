// Connection settings validation and `reqwest::Client` construction.
//
// Inputs arrive raw from the host (or the config crate). Validation runs
// in a fixed order and the first violation wins: URL, then PEM shape,
// then authentication mode resolution.

use std::time::Duration;

use rustls_pki_types::pem::PemObject;
use rustls_pki_types::{CertificateDer, PrivateKeyDer};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::auth::Credentials;
use crate::error::{ConfigError, CredentialField};

const USER_AGENT: &str = concat!("scc/", env!("CARGO_PKG_VERSION"));

/// Shared transport tuning for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// Raw connection inputs, exactly as the host supplied them.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSettings {
    /// Base URL of the connector, e.g. `https://scc.example.com:8443`.
    pub instance_url: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    /// PEM CA certificate used to verify the connector instead of the system store.
    pub ca_certificate: Option<String>,
    /// PEM client certificate for mutual TLS.
    pub client_certificate: Option<String>,
    /// PEM private key matching `client_certificate`.
    pub client_key: Option<SecretString>,
    pub transport: TransportConfig,
}

/// Settings that passed validation and can be turned into a client.
#[derive(Debug, Clone)]
pub struct ValidatedSettings {
    pub base_url: Url,
    pub credentials: Credentials,
    pub ca_certificate: Option<String>,
    pub transport: TransportConfig,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl ConnectionSettings {
    /// Validate inputs without touching the network.
    pub fn validate(&self) -> Result<ValidatedSettings, ConfigError> {
        let base_url = parse_instance_url(&self.instance_url)?;

        let ca_certificate = non_empty(self.ca_certificate.as_deref());
        let client_certificate = non_empty(self.client_certificate.as_deref());
        let client_key = non_empty(self.client_key.as_ref().map(|s| s.expose_secret()));

        if let Some(pem) = ca_certificate {
            check_certificate_pem(CredentialField::CaCertificate, pem)?;
        }
        if let Some(pem) = client_certificate {
            check_certificate_pem(CredentialField::ClientCertificate, pem)?;
        }
        if let Some(pem) = client_key {
            PrivateKeyDer::from_pem_slice(pem.as_bytes()).map_err(|e| {
                ConfigError::InvalidCredentialFormat {
                    field: CredentialField::ClientKey,
                    reason: format!("{e:?}"),
                }
            })?;
        }

        let username = non_empty(self.username.as_deref());
        let password = non_empty(self.password.as_ref().map(|s| s.expose_secret()));

        let credentials = match ((username, password), (client_certificate, client_key)) {
            ((Some(_), Some(_)), (Some(_), Some(_))) => {
                return Err(ConfigError::ConflictingAuthentication);
            }
            ((Some(username), Some(password)), _) => Credentials::Basic {
                username: username.to_owned(),
                password: SecretString::from(password.to_owned()),
            },
            (_, (Some(certificate), Some(key))) => Credentials::Certificate {
                certificate_pem: certificate.to_owned(),
                key_pem: SecretString::from(key.to_owned()),
            },
            _ => return Err(ConfigError::MissingAuthentication),
        };

        Ok(ValidatedSettings {
            base_url,
            credentials,
            ca_certificate: ca_certificate.map(str::to_owned),
            transport: self.transport.clone(),
        })
    }
}

fn parse_instance_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };

    if raw.is_empty() {
        return Err(invalid("instance URL is required".into()));
    }

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme must be http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(invalid("URL has no host".into()));
    }

    Ok(url)
}

fn check_certificate_pem(field: CredentialField, pem: &str) -> Result<(), ConfigError> {
    CertificateDer::from_pem_slice(pem.as_bytes())
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidCredentialFormat {
            field,
            reason: format!("{e:?}"),
        })
}

impl ValidatedSettings {
    /// Build a `reqwest::Client` for these settings.
    ///
    /// Certificate auth installs the client identity; a supplied CA
    /// certificate replaces the built-in trust roots. Basic credentials are
    /// applied per request by [`ConnectorClient`](crate::ConnectorClient).
    pub fn build_client(&self) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.transport.timeout)
            .user_agent(USER_AGENT);

        if let Credentials::Certificate {
            certificate_pem,
            key_pem,
        } = &self.credentials
        {
            let mut bundle = certificate_pem.trim_end().to_owned();
            bundle.push('\n');
            bundle.push_str(key_pem.expose_secret());
            let identity = reqwest::Identity::from_pem(bundle.as_bytes())
                .map_err(|e| ConfigError::ClientBuild(format!("invalid client identity: {e}")))?;
            builder = builder.identity(identity);
        }

        if let Some(ref ca_pem) = self.ca_certificate {
            let cert = reqwest::Certificate::from_pem(ca_pem.as_bytes())
                .map_err(|e| ConfigError::ClientBuild(format!("invalid CA cert: {e}")))?;
            builder = builder
                .tls_built_in_root_certs(false)
                .add_root_certificate(cert);
        }

        builder
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))
    }
}
