// ── API-to-domain conversions ──
//
// Bridges `scc_api::types` responses into `scc_core::model` records.
// Merging functions take the caller's record as the source of identity
// fields; everything else comes from the response.

use chrono::{DateTime, Utc};

use scc_api::types::{
    ChannelResponse, ChannelStateResponse, DomainMappingResponse, ResourceResponse,
    SubaccountCertificate as WireCertificate, SubaccountResponse, SubaccountSummary as WireSummary,
    SystemMappingResponse, TunnelResponse,
};

use crate::model::{
    ChannelStatus, ChannelTarget, DomainMapping, ServiceChannel, Subaccount,
    SubaccountCertificate, SubaccountSummary, SystemMapping, SystemMappingResource, TunnelStatus,
};

// ── Helpers ────────────────────────────────────────────────────────

/// The connector reports timestamps as epoch milliseconds.
fn epoch_millis(ts: Option<i64>) -> Option<DateTime<Utc>> {
    ts.and_then(DateTime::from_timestamp_millis)
}

// ── Subaccounts ────────────────────────────────────────────────────

impl From<WireCertificate> for SubaccountCertificate {
    fn from(c: WireCertificate) -> Self {
        Self {
            subject_dn: c.subject_dn,
            issuer: c.issuer,
            serial_number: c.serial_number,
            not_before: epoch_millis(c.not_before_time_stamp),
            not_after: epoch_millis(c.not_after_time_stamp),
        }
    }
}

impl From<TunnelResponse> for TunnelStatus {
    fn from(t: TunnelResponse) -> Self {
        Self {
            state: t.state.unwrap_or_else(|| "Disconnected".into()),
            connected_since: epoch_millis(t.connected_since_time_stamp),
            connections: t.connections.unwrap_or_default(),
            user: t.user,
            certificate: t.subaccount_certificate.map(Into::into),
        }
    }
}

impl From<WireSummary> for SubaccountSummary {
    fn from(s: WireSummary) -> Self {
        Self {
            region_host: s.region_host,
            subaccount: s.subaccount,
            location_id: s.location_id,
            display_name: s.display_name,
            description: s.description,
        }
    }
}

pub(crate) fn merge_subaccount(known: &Subaccount, resp: SubaccountResponse) -> Subaccount {
    let tunnel: Option<TunnelStatus> = resp.tunnel.map(Into::into);
    Subaccount {
        region_host: known.region_host.clone(),
        subaccount: known.subaccount.clone(),
        cloud_user: known.cloud_user.clone(),
        cloud_password: known.cloud_password.clone(),
        location_id: resp.location_id.filter(|l| !l.is_empty()),
        display_name: resp.display_name.filter(|d| !d.is_empty()),
        description: resp.description.filter(|d| !d.is_empty()),
        connected: Some(tunnel.as_ref().is_some_and(TunnelStatus::is_connected)),
        tunnel,
    }
}

// ── Domain mappings ────────────────────────────────────────────────

pub(crate) fn merge_domain_mapping(
    known: &DomainMapping,
    resp: DomainMappingResponse,
) -> DomainMapping {
    DomainMapping {
        region_host: known.region_host.clone(),
        subaccount: known.subaccount.clone(),
        internal_domain: known.internal_domain.clone(),
        virtual_domain: resp.virtual_domain,
    }
}

pub(crate) fn domain_mapping_in(
    region_host: &str,
    subaccount: &str,
    resp: DomainMappingResponse,
) -> DomainMapping {
    DomainMapping {
        region_host: region_host.to_owned(),
        subaccount: subaccount.to_owned(),
        internal_domain: resp.internal_domain,
        virtual_domain: resp.virtual_domain,
    }
}

// ── System mappings ────────────────────────────────────────────────

pub(crate) fn merge_system_mapping(
    known: &SystemMapping,
    resp: SystemMappingResponse,
) -> SystemMapping {
    SystemMapping {
        region_host: known.region_host.clone(),
        subaccount: known.subaccount.clone(),
        virtual_host: known.virtual_host.clone(),
        virtual_port: known.virtual_port.clone(),
        local_host: resp.local_host,
        local_port: resp.local_port,
        protocol: resp.protocol,
        backend_type: resp.backend_type,
        authentication_mode: resp.authentication_mode,
        host_in_header: resp.host_in_header,
        sid: resp.sid.filter(|s| !s.is_empty()),
        description: resp.description.filter(|d| !d.is_empty()),
        total_resources_count: resp.total_resources_count,
        enabled_resources_count: resp.enabled_resources_count,
        creation_date: resp.creation_date,
    }
}

pub(crate) fn system_mapping_in(
    region_host: &str,
    subaccount: &str,
    resp: SystemMappingResponse,
) -> SystemMapping {
    let identity = SystemMapping {
        region_host: region_host.to_owned(),
        subaccount: subaccount.to_owned(),
        virtual_host: resp.virtual_host.clone(),
        virtual_port: resp.virtual_port.clone(),
        ..SystemMapping::default()
    };
    merge_system_mapping(&identity, resp)
}

pub(crate) fn merge_resource(
    known: &SystemMappingResource,
    resp: ResourceResponse,
) -> SystemMappingResource {
    SystemMappingResource {
        region_host: known.region_host.clone(),
        subaccount: known.subaccount.clone(),
        virtual_host: known.virtual_host.clone(),
        virtual_port: known.virtual_port.clone(),
        id: known.id.clone(),
        enabled: resp.enabled,
        exact_match_only: resp.exact_match_only,
        websocket_upgrade_allowed: resp.websocket_upgrade_allowed,
        description: resp.description.filter(|d| !d.is_empty()),
        creation_date: resp.creation_date,
    }
}

// ── Service channels ───────────────────────────────────────────────

impl From<ChannelStateResponse> for ChannelStatus {
    fn from(s: ChannelStateResponse) -> Self {
        Self {
            connected: s.connected,
            opened_connections: s.opened_connections,
            connected_since: epoch_millis(s.connected_since_time_stamp),
        }
    }
}

/// Merge a channel record. `id` is taken from the response only when the
/// caller's record does not carry one yet (first create).
pub(crate) fn merge_channel<T: ChannelTarget>(
    known: &ServiceChannel<T>,
    resp: ChannelResponse,
) -> ServiceChannel<T> {
    ServiceChannel {
        region_host: known.region_host.clone(),
        subaccount: known.subaccount.clone(),
        id: known.id.or(Some(resp.id)),
        target: T::from_response(&resp),
        port: resp.port.unwrap_or(known.port),
        connections: resp.connections,
        comment: resp.comment.filter(|c| !c.is_empty()),
        enabled: Some(resp.enabled),
        status: resp.state.map(Into::into),
    }
}

pub(crate) fn channel_in<T: ChannelTarget>(
    region_host: &str,
    subaccount: &str,
    resp: ChannelResponse,
) -> ServiceChannel<T> {
    let identity = ServiceChannel::<T> {
        region_host: region_host.to_owned(),
        subaccount: subaccount.to_owned(),
        ..ServiceChannel::default()
    };
    merge_channel(&identity, resp)
}
