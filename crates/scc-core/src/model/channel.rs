// ── Service channel domain types ──
//
// All channel kinds share id/port/connections/state handling and differ
// only in the backend they point at. `ServiceChannel<T>` carries the shared
// part; `T` describes the backend and knows its own natural key.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use scc_api::ChannelType;
use scc_api::types::{self, ChannelResponse};

/// Backend description of one service channel kind.
pub trait ChannelTarget:
    Clone + Default + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Wire name in `/channels/{type}`.
    const CHANNEL_TYPE: ChannelType;
    /// Human-readable kind name for diagnostics.
    const KIND: &'static str;
    /// Name of the natural-key field, for diagnostics.
    const KEY_NAME: &'static str;

    /// Natural key used to find a freshly created channel among its siblings.
    fn natural_key(&self) -> &str;

    /// Natural key of a server record, if the record carries one.
    fn response_key(resp: &ChannelResponse) -> Option<&str>;

    /// Rebuild the backend description from a server record.
    fn from_response(resp: &ChannelResponse) -> Self;

    /// Wire representation for request bodies.
    fn to_wire(&self) -> types::ChannelTarget<'_>;
}

/// A service channel of kind `T`.
///
/// `id` is allocated by the server and is `None` until the first create
/// or import has recovered it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChannel<T> {
    pub region_host: String,
    pub subaccount: String,
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(flatten)]
    pub target: T,
    pub port: u16,
    #[serde(default = "default_connections")]
    pub connections: u32,
    #[serde(default)]
    pub comment: Option<String>,

    /// Desired enabled state. `None` leaves whatever the server decides.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Observed connection state.
    #[serde(default)]
    pub status: Option<ChannelStatus>,
}

fn default_connections() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStatus {
    pub connected: bool,
    pub opened_connections: u32,
    pub connected_since: Option<DateTime<Utc>>,
}

// ── Kubernetes ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct K8sTarget {
    /// Cluster host, e.g. `cp.cluster.example.com:443`.
    pub k8s_cluster: String,
    /// Service host, e.g. `svc.cluster.example.com:30001`.
    pub k8s_service: String,
}

impl ChannelTarget for K8sTarget {
    const CHANNEL_TYPE: ChannelType = ChannelType::K8s;
    const KIND: &'static str = "K8S service channel";
    const KEY_NAME: &'static str = "k8s_cluster";

    fn natural_key(&self) -> &str {
        &self.k8s_cluster
    }

    fn response_key(resp: &ChannelResponse) -> Option<&str> {
        resp.k8s_cluster.as_deref()
    }

    fn from_response(resp: &ChannelResponse) -> Self {
        Self {
            k8s_cluster: resp.k8s_cluster.clone().unwrap_or_default(),
            k8s_service: resp.k8s_service.clone().unwrap_or_default(),
        }
    }

    fn to_wire(&self) -> types::ChannelTarget<'_> {
        types::ChannelTarget::K8s {
            k8s_cluster: &self.k8s_cluster,
            k8s_service: &self.k8s_service,
        }
    }
}

// ── ABAP Cloud ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbapCloudTarget {
    /// Tenant host, e.g. `tenant.abap.eu10.hana.ondemand.com`.
    pub abap_cloud_tenant_host: String,
    #[serde(default)]
    pub instance_number: u32,
}

impl ChannelTarget for AbapCloudTarget {
    const CHANNEL_TYPE: ChannelType = ChannelType::AbapCloud;
    const KIND: &'static str = "ABAP Cloud service channel";
    const KEY_NAME: &'static str = "abap_cloud_tenant_host";

    fn natural_key(&self) -> &str {
        &self.abap_cloud_tenant_host
    }

    fn response_key(resp: &ChannelResponse) -> Option<&str> {
        resp.abap_cloud_tenant_host.as_deref()
    }

    fn from_response(resp: &ChannelResponse) -> Self {
        Self {
            abap_cloud_tenant_host: resp.abap_cloud_tenant_host.clone().unwrap_or_default(),
            instance_number: resp.instance_number.unwrap_or_default(),
        }
    }

    fn to_wire(&self) -> types::ChannelTarget<'_> {
        types::ChannelTarget::AbapCloud {
            abap_cloud_tenant_host: &self.abap_cloud_tenant_host,
            instance_number: self.instance_number,
        }
    }
}

// ── HANA ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanaTarget {
    pub hana_instance_name: String,
}

impl ChannelTarget for HanaTarget {
    const CHANNEL_TYPE: ChannelType = ChannelType::Hana;
    const KIND: &'static str = "HANA service channel";
    const KEY_NAME: &'static str = "hana_instance_name";

    fn natural_key(&self) -> &str {
        &self.hana_instance_name
    }

    fn response_key(resp: &ChannelResponse) -> Option<&str> {
        resp.hana_instance_name.as_deref()
    }

    fn from_response(resp: &ChannelResponse) -> Self {
        Self {
            hana_instance_name: resp.hana_instance_name.clone().unwrap_or_default(),
        }
    }

    fn to_wire(&self) -> types::ChannelTarget<'_> {
        types::ChannelTarget::Hana {
            hana_instance_name: &self.hana_instance_name,
        }
    }
}

pub type K8sChannel = ServiceChannel<K8sTarget>;
pub type AbapCloudChannel = ServiceChannel<AbapCloudTarget>;
pub type HanaChannel = ServiceChannel<HanaTarget>;
