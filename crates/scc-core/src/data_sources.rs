//! Read-only listings, one GET each, mapped into domain records.

use scc_api::{ConnectorClient, MappingRef};

use crate::convert::{channel_in, domain_mapping_in, merge_resource, system_mapping_in};
use crate::error::CoreError;
use crate::model::{
    ChannelTarget, DomainMapping, ServiceChannel, SubaccountSummary, SystemMapping,
    SystemMappingResource,
};

pub async fn list_subaccounts(
    client: &ConnectorClient,
) -> Result<Vec<SubaccountSummary>, CoreError> {
    let rows = client.list_subaccounts().await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn list_domain_mappings(
    client: &ConnectorClient,
    region_host: &str,
    subaccount: &str,
) -> Result<Vec<DomainMapping>, CoreError> {
    let rows = client.list_domain_mappings(region_host, subaccount).await?;
    Ok(rows
        .into_iter()
        .map(|r| domain_mapping_in(region_host, subaccount, r))
        .collect())
}

pub async fn list_system_mappings(
    client: &ConnectorClient,
    region_host: &str,
    subaccount: &str,
) -> Result<Vec<SystemMapping>, CoreError> {
    let rows = client.list_system_mappings(region_host, subaccount).await?;
    Ok(rows
        .into_iter()
        .map(|r| system_mapping_in(region_host, subaccount, r))
        .collect())
}

pub async fn list_system_mapping_resources(
    client: &ConnectorClient,
    mapping: MappingRef<'_>,
) -> Result<Vec<SystemMappingResource>, CoreError> {
    let rows = client.list_resources(mapping).await?;
    Ok(rows
        .into_iter()
        .map(|r| {
            let parent = SystemMappingResource {
                region_host: mapping.region_host.to_owned(),
                subaccount: mapping.subaccount.to_owned(),
                virtual_host: mapping.virtual_host.to_owned(),
                virtual_port: mapping.virtual_port.to_owned(),
                id: r.id.clone(),
                ..SystemMappingResource::default()
            };
            merge_resource(&parent, r)
        })
        .collect())
}

/// All channels of type `T` configured for a subaccount.
pub async fn list_channels<T: ChannelTarget>(
    client: &ConnectorClient,
    region_host: &str,
    subaccount: &str,
) -> Result<Vec<ServiceChannel<T>>, CoreError> {
    let rows = client
        .list_channels(region_host, subaccount, T::CHANNEL_TYPE)
        .await?;
    Ok(rows
        .into_iter()
        .map(|r| channel_in(region_host, subaccount, r))
        .collect())
}

pub async fn connector_version(client: &ConnectorClient) -> Result<String, CoreError> {
    Ok(client.get_version().await?.version)
}
