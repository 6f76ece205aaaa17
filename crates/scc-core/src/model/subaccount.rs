// ── Subaccount domain types ──

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subaccount tunnel configured on the connector.
///
/// `region_host` and `subaccount` identify the tunnel. `cloud_user` and
/// `cloud_password` are write-only: the server never echoes them, so they
/// are carried over from the caller's record.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subaccount {
    pub region_host: String,
    pub subaccount: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_password: Option<String>,

    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    /// Desired tunnel state. `None` leaves whatever the server decides.
    #[serde(default)]
    pub connected: Option<bool>,

    /// Observed tunnel details.
    #[serde(default)]
    pub tunnel: Option<TunnelStatus>,
}

impl fmt::Debug for Subaccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subaccount")
            .field("region_host", &self.region_host)
            .field("subaccount", &self.subaccount)
            .field("cloud_user", &self.cloud_user)
            .field("cloud_password", &self.cloud_password.as_ref().map(|_| "[REDACTED]"))
            .field("location_id", &self.location_id)
            .field("display_name", &self.display_name)
            .field("description", &self.description)
            .field("connected", &self.connected)
            .field("tunnel", &self.tunnel)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TunnelStatus {
    /// `Connected`, `Disconnected`, `ConnectFailure`, ...
    pub state: String,
    pub connected_since: Option<DateTime<Utc>>,
    pub connections: u32,
    pub user: Option<String>,
    pub certificate: Option<SubaccountCertificate>,
}

impl TunnelStatus {
    pub fn is_connected(&self) -> bool {
        self.state.eq_ignore_ascii_case("connected")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaccountCertificate {
    pub subject_dn: Option<String>,
    pub issuer: Option<String>,
    pub serial_number: Option<String>,
    pub not_before: Option<DateTime<Utc>>,
    pub not_after: Option<DateTime<Utc>>,
}

/// Lightweight row returned by the subaccount listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaccountSummary {
    pub region_host: String,
    pub subaccount: String,
    pub location_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
}
