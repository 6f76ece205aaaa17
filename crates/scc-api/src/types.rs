// Wire types for the Cloud Connector configuration API.
//
// One request struct per endpoint, one response struct per resource.
// Field names follow the server's camelCase; `locationID` is the only
// irregular spelling and is renamed explicitly.

use serde::{Deserialize, Serialize};

use crate::paths::ChannelType;

// ── Connector ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionResponse {
    pub version: String,
}

// ── Subaccounts ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountCreateRequest<'a> {
    pub region_host: &'a str,
    pub subaccount: &'a str,
    pub cloud_user: &'a str,
    pub cloud_password: &'a str,
    #[serde(rename = "locationID", skip_serializing_if = "Option::is_none")]
    pub location_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountUpdateRequest<'a> {
    #[serde(rename = "locationID", skip_serializing_if = "Option::is_none")]
    pub location_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubaccountStateRequest {
    pub connected: bool,
}

/// Entry of `GET /subaccounts`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountSummary {
    pub region_host: String,
    pub subaccount: String,
    #[serde(rename = "locationID", default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /subaccounts/{region}/{subaccount}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountResponse {
    pub region_host: String,
    pub subaccount: String,
    #[serde(rename = "locationID", default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tunnel: Option<TunnelResponse>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TunnelResponse {
    /// `Connected`, `Disconnected`, `ConnectFailure`, ...
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub connected_since_time_stamp: Option<i64>,
    #[serde(default)]
    pub connections: Option<u32>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub subaccount_certificate: Option<SubaccountCertificate>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountCertificate {
    #[serde(default)]
    pub not_after_time_stamp: Option<i64>,
    #[serde(default)]
    pub not_before_time_stamp: Option<i64>,
    #[serde(default, rename = "subjectDN")]
    pub subject_dn: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
}

// ── Domain mappings ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMappingRequest<'a> {
    pub virtual_domain: &'a str,
    pub internal_domain: &'a str,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMappingResponse {
    pub virtual_domain: String,
    pub internal_domain: String,
}

// ── System mappings ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMappingRequest<'a> {
    pub virtual_host: &'a str,
    pub virtual_port: &'a str,
    pub local_host: &'a str,
    pub local_port: &'a str,
    pub protocol: &'a str,
    pub backend_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_in_header: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMappingResponse {
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
    #[serde(default)]
    pub total_resources_count: Option<u32>,
    #[serde(default)]
    pub enabled_resources_count: Option<u32>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

// ── System mapping resources ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ResourceCreateRequest<'a> {
    pub id: &'a str,
    pub enabled: bool,
    pub exact_match_only: bool,
    pub websocket_upgrade_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdateRequest<'a> {
    pub enabled: bool,
    pub exact_match_only: bool,
    pub websocket_upgrade_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ResourceResponse {
    pub id: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub exact_match_only: bool,
    #[serde(default)]
    pub websocket_upgrade_allowed: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

// ── Service channels ─────────────────────────────────────────────────

/// Kind-specific target of a service channel.
///
/// Serialized flat into the channel request body.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChannelTarget<'a> {
    #[serde(rename_all = "camelCase")]
    K8s {
        k8s_cluster: &'a str,
        k8s_service: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    AbapCloud {
        abap_cloud_tenant_host: &'a str,
        instance_number: u32,
    },
    #[serde(rename_all = "camelCase")]
    Hana { hana_instance_name: &'a str },
}

impl ChannelTarget<'_> {
    pub fn channel_type(&self) -> ChannelType {
        match self {
            Self::K8s { .. } => ChannelType::K8s,
            Self::AbapCloud { .. } => ChannelType::AbapCloud,
            Self::Hana { .. } => ChannelType::Hana,
        }
    }
}

/// Body of `POST /channels/{type}` and `PUT /channels/{type}/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRequest<'a> {
    #[serde(flatten)]
    pub target: ChannelTarget<'a>,
    pub port: u16,
    pub connections: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChannelStateRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub id: u64,
    #[serde(default)]
    pub type_desc: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub connections: u32,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub state: Option<ChannelStateResponse>,
    // K8S
    #[serde(default)]
    pub k8s_cluster: Option<String>,
    #[serde(default)]
    pub k8s_service: Option<String>,
    // ABAPCloud
    #[serde(default)]
    pub abap_cloud_tenant_host: Option<String>,
    #[serde(default)]
    pub instance_number: Option<u32>,
    // HANA
    #[serde(default)]
    pub hana_instance_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStateResponse {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub opened_connections: u32,
    #[serde(default)]
    pub connected_since_time_stamp: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn subaccount_create_uses_location_id_spelling() {
        let body = SubaccountCreateRequest {
            region_host: "cf.eu10.hana.ondemand.com",
            subaccount: "sub",
            cloud_user: "user@example.com",
            cloud_password: "secret",
            location_id: Some("LOC1"),
            display_name: None,
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "regionHost": "cf.eu10.hana.ondemand.com",
                "subaccount": "sub",
                "cloudUser": "user@example.com",
                "cloudPassword": "secret",
                "locationID": "LOC1",
            })
        );
    }

    #[test]
    fn channel_request_flattens_target() {
        let body = ChannelRequest {
            target: ChannelTarget::AbapCloud {
                abap_cloud_tenant_host: "tenant.example.com",
                instance_number: 0,
            },
            port: 3300,
            connections: 1,
            comment: Some("abap"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "abapCloudTenantHost": "tenant.example.com",
                "instanceNumber": 0,
                "port": 3300,
                "connections": 1,
                "comment": "abap",
            })
        );
    }

    #[test]
    fn channel_response_tolerates_missing_kind_fields() {
        let parsed: ChannelResponse = serde_json::from_value(json!({
            "id": 7,
            "typeDesc": "K8S",
            "k8sCluster": "cluster.example.com:443",
            "k8sService": "svc.example.com:30001",
            "enabled": true,
            "connections": 2,
            "state": { "connected": true, "openedConnections": 2 }
        }))
        .unwrap();
        assert_eq!(parsed.id, 7);
        assert!(parsed.state.unwrap().connected);
        assert!(parsed.hana_instance_name.is_none());
    }
}
