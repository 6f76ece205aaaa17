// Cloud Connector HTTP client
//
// Wraps `reqwest::Client` with base-URL handling, per-request basic auth,
// and response classification. Endpoint groups (subaccounts, channels, ...)
// are inherent methods in `endpoints/` so this module stays focused on
// transport mechanics.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, trace, warn};
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::paths::VERSION_PATH;
use crate::transport::ConnectionSettings;
use crate::types::VersionResponse;

#[derive(Debug, Clone)]
struct BasicAuth {
    username: String,
    password: SecretString,
}

/// Async client for one Cloud Connector instance.
///
/// Holds the configured authentication so callers only deal in paths and
/// typed bodies. No caching, no retries: every call is one HTTP exchange.
#[derive(Debug, Clone)]
pub struct ConnectorClient {
    http: reqwest::Client,
    base_url: Url,
    basic_auth: Option<BasicAuth>,
    connector_version: Option<String>,
}

impl ConnectorClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Validate settings, build the HTTP client, and probe the connector.
    ///
    /// The probe is a `GET` on the version endpoint. 401/403 maps to
    /// [`Error::AuthenticationRejected`]; anything else that keeps the probe
    /// from succeeding maps to [`Error::ConnectionFailed`].
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, Error> {
        let validated = settings.validate()?;
        let http = validated.build_client()?;

        let basic_auth = match validated.credentials {
            Credentials::Basic { username, password } => Some(BasicAuth { username, password }),
            Credentials::Certificate { .. } => None,
        };

        let mut client = Self {
            http,
            base_url: validated.base_url,
            basic_auth,
            connector_version: None,
        };

        let version = client.probe().await?;
        info!(url = %client.base_url, version = %version, "connected to Cloud Connector");
        client.connector_version = Some(version);
        Ok(client)
    }

    /// Wrap an existing `reqwest::Client` (caller manages TLS).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            basic_auth: None,
            connector_version: None,
        })
    }

    /// Attach basic credentials to every request.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password,
        });
        self
    }

    /// The connector base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Version reported by the configure-time probe, if one ran.
    pub fn connector_version(&self) -> Option<&str> {
        self.connector_version.as_deref()
    }

    async fn probe(&self) -> Result<String, Error> {
        let url = self.url(VERSION_PATH)?;
        debug!("probing {url}");

        let connection_failed = |reason: String| Error::ConnectionFailed {
            url: self.base_url.to_string(),
            reason,
        };

        let resp = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(|e| connection_failed(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::AuthenticationRejected {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(connection_failed(format!("version probe returned HTTP {status}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| connection_failed(e.to_string()))?;
        let version: VersionResponse = serde_json::from_str(&body)
            .map_err(|e| connection_failed(format!("unexpected version response: {e}")))?;
        Ok(version.version)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append an absolute API path (e.g. `/api/v1/...`) to the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.basic_auth {
            Some(ref auth) => {
                builder.basic_auth(&auth.username, Some(auth.password.expose_secret()))
            }
            None => builder,
        }
    }

    // ── Request execution ────────────────────────────────────────────

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut builder = self.authorize(self.http.request(method, url));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        trace!(%status, "response received");

        if status.is_success() {
            Ok(resp)
        } else {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(%status, error = %e, "cannot read error response body");
                    format!("<failed to read response body: {e}>")
                }
            };
            Err(Error::Request {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Issue one request and decode the response body into `T`.
    ///
    /// Non-2xx responses become [`Error::Request`] carrying the server's
    /// body verbatim. A 2xx body that does not decode is [`Error::Decode`].
    /// An empty 2xx body decodes as JSON `null`.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let resp = self.dispatch(method, path, body).await?;
        let text = resp.text().await?;
        let source = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str(source).map_err(|e| {
            let preview: String = text.chars().take(200).collect();
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body: text.clone(),
            }
        })
    }

    /// Issue one request, checking the status but ignoring the body.
    pub async fn execute_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.dispatch(method, path, body).await.map(drop)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.execute::<T, ()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        self.execute_empty(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        self.execute_empty(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute_empty::<()>(Method::DELETE, path, None).await
    }
}
