use secrecy::SecretString;

/// Which authentication scheme a connection uses.
///
/// Marker enum (no data) -- the actual secret material lives in [`Credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum AuthMode {
    /// HTTP basic auth with an administrator user.
    #[strum(serialize = "basic")]
    Basic,
    /// Mutual TLS with a client certificate and key.
    #[strum(serialize = "certificate")]
    Certificate,
}

/// Resolved credentials for talking to a Cloud Connector instance.
///
/// Exactly one scheme is ever active; [`ConnectionSettings::validate`]
/// rejects inputs that supply both or neither.
///
/// [`ConnectionSettings::validate`]: crate::ConnectionSettings::validate
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Administrator username + password, sent as HTTP basic auth.
    Basic {
        username: String,
        password: SecretString,
    },

    /// PEM-encoded client certificate chain and private key.
    Certificate {
        certificate_pem: String,
        key_pem: SecretString,
    },
}

impl Credentials {
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::Basic { .. } => AuthMode::Basic,
            Self::Certificate { .. } => AuthMode::Certificate,
        }
    }
}
