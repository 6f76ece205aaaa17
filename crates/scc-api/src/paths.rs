// Endpoint path templates.
//
// Every path is assembled from literal segments and parameters. Free-form
// identifiers go through `encode_segment`; region hosts, subaccount ids,
// virtual hosts and numeric ids are structured tokens and pass verbatim.

use std::fmt;

use crate::codec::encode_segment;

/// Root of the configuration API.
pub const SUBACCOUNTS_BASE: &str = "/api/v1/configuration/subaccounts";

/// Version endpoint used as the configure-time liveness probe.
pub const VERSION_PATH: &str = "/api/v1/connector/version";

/// Service channel type, as it appears in `/channels/{type}`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum ChannelType {
    /// Kubernetes cluster channel.
    #[serde(rename = "K8S")]
    #[strum(serialize = "K8S")]
    K8s,
    /// ABAP Cloud tenant channel.
    #[serde(rename = "ABAPCloud")]
    #[strum(serialize = "ABAPCloud")]
    AbapCloud,
    /// HANA database instance channel.
    #[serde(rename = "HANA")]
    #[strum(serialize = "HANA")]
    Hana,
}

/// A request path relative to the connector's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPath(String);

impl EndpointPath {
    fn root() -> Self {
        Self(SUBACCOUNTS_BASE.to_owned())
    }

    /// Append a structural literal.
    fn literal(mut self, segment: &str) -> Self {
        self.0.push('/');
        self.0.push_str(segment);
        self
    }

    /// Append a structured parameter verbatim.
    fn param(self, value: impl fmt::Display) -> Self {
        self.literal(&value.to_string())
    }

    /// Append a free-form identifier through the path codec.
    fn encoded(self, raw: &str) -> Self {
        self.literal(&encode_segment(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EndpointPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Subaccounts ─────────────────────────────────────────────────────

pub fn subaccounts() -> EndpointPath {
    EndpointPath::root()
}

pub fn subaccount(region_host: &str, subaccount: &str) -> EndpointPath {
    EndpointPath::root().param(region_host).param(subaccount)
}

pub fn subaccount_state(region_host: &str, subaccount_id: &str) -> EndpointPath {
    subaccount(region_host, subaccount_id).literal("state")
}

// ── Domain mappings ─────────────────────────────────────────────────

pub fn domain_mappings(region_host: &str, subaccount_id: &str) -> EndpointPath {
    subaccount(region_host, subaccount_id).literal("domainMappings")
}

pub fn domain_mapping(
    region_host: &str,
    subaccount_id: &str,
    internal_domain: &str,
) -> EndpointPath {
    domain_mappings(region_host, subaccount_id).param(internal_domain)
}

// ── System mappings ─────────────────────────────────────────────────

pub fn system_mappings(region_host: &str, subaccount_id: &str) -> EndpointPath {
    subaccount(region_host, subaccount_id).literal("systemMappings")
}

pub fn system_mapping(
    region_host: &str,
    subaccount_id: &str,
    virtual_host: &str,
    virtual_port: &str,
) -> EndpointPath {
    system_mappings(region_host, subaccount_id).param(format_args!("{virtual_host}:{virtual_port}"))
}

pub fn system_mapping_resources(
    region_host: &str,
    subaccount_id: &str,
    virtual_host: &str,
    virtual_port: &str,
) -> EndpointPath {
    system_mapping(region_host, subaccount_id, virtual_host, virtual_port).literal("resources")
}

pub fn system_mapping_resource(
    region_host: &str,
    subaccount_id: &str,
    virtual_host: &str,
    virtual_port: &str,
    resource_id: &str,
) -> EndpointPath {
    system_mapping_resources(region_host, subaccount_id, virtual_host, virtual_port)
        .encoded(resource_id)
}

// ── Service channels ────────────────────────────────────────────────

pub fn channels(region_host: &str, subaccount_id: &str, channel_type: ChannelType) -> EndpointPath {
    subaccount(region_host, subaccount_id)
        .literal("channels")
        .literal(channel_type.as_ref())
}

pub fn channel(
    region_host: &str,
    subaccount_id: &str,
    channel_type: ChannelType,
    id: u64,
) -> EndpointPath {
    channels(region_host, subaccount_id, channel_type).param(id)
}

pub fn channel_state(
    region_host: &str,
    subaccount_id: &str,
    channel_type: ChannelType,
    id: u64,
) -> EndpointPath {
    channel(region_host, subaccount_id, channel_type, id).literal("state")
}
