// ── System mapping domain types ──

use serde::{Deserialize, Serialize};

/// Exposure of a backend host:port under a virtual host:port.
///
/// Ports are strings on the wire and stay strings here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMapping {
    pub region_host: String,
    pub subaccount: String,
    pub virtual_host: String,
    pub virtual_port: String,

    pub local_host: String,
    pub local_port: String,
    pub protocol: String,
    pub backend_type: String,
    #[serde(default)]
    pub authentication_mode: Option<String>,
    #[serde(default)]
    pub host_in_header: Option<String>,
    #[serde(default)]
    pub sid: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    // Observed
    #[serde(default)]
    pub total_resources_count: Option<u32>,
    #[serde(default)]
    pub enabled_resources_count: Option<u32>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

/// A URL path exposed through a system mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SystemMappingResource {
    pub region_host: String,
    pub subaccount: String,
    pub virtual_host: String,
    pub virtual_port: String,
    /// URL path prefix, e.g. `/sap/opu/odata`.
    pub id: String,

    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub exact_match_only: bool,
    #[serde(default)]
    pub websocket_upgrade_allowed: bool,
    #[serde(default)]
    pub description: Option<String>,

    // Observed
    #[serde(default)]
    pub creation_date: Option<String>,
}

fn default_true() -> bool {
    true
}
