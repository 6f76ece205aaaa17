use scc_api::types::{ResourceCreateRequest, ResourceUpdateRequest};
use scc_api::{ConnectorClient, MappingRef};

use crate::convert::merge_resource;
use crate::error::CoreError;
use crate::import::ImportId;
use crate::model::SystemMappingResource;
use crate::reconcile::{IdentityField, Resource, apply_and_reconcile};

fn mapping(r: &SystemMappingResource) -> MappingRef<'_> {
    MappingRef {
        region_host: &r.region_host,
        subaccount: &r.subaccount,
        virtual_host: &r.virtual_host,
        virtual_port: &r.virtual_port,
    }
}

async fn refetch(
    client: &ConnectorClient,
    known: &SystemMappingResource,
) -> Result<SystemMappingResource, CoreError> {
    let resp = client.get_resource(mapping(known), &known.id).await?;
    Ok(merge_resource(known, resp))
}

impl Resource for SystemMappingResource {
    const KIND: &'static str = "system mapping resource";
    const IMPORT_SHAPE: &'static [&'static str] =
        &["region_host", "subaccount", "virtual_host", "virtual_port", "id"];

    fn identity(&self) -> Vec<IdentityField> {
        vec![
            IdentityField::new("region_host", &self.region_host),
            IdentityField::new("subaccount", &self.subaccount),
            IdentityField::new("virtual_host", &self.virtual_host),
            IdentityField::new("virtual_port", &self.virtual_port),
            IdentityField::new("id", &self.id),
        ]
    }

    fn from_import(id: &ImportId) -> Result<Self, CoreError> {
        id.numeric(3)?;
        Ok(Self {
            region_host: id.field(0).to_owned(),
            subaccount: id.field(1).to_owned(),
            virtual_host: id.field(2).to_owned(),
            virtual_port: id.field(3).to_owned(),
            id: id.field(4).to_owned(),
            ..Self::default()
        })
    }

    async fn create(client: &ConnectorClient, desired: &Self) -> Result<Self, CoreError> {
        let body = ResourceCreateRequest {
            id: &desired.id,
            enabled: desired.enabled,
            exact_match_only: desired.exact_match_only,
            websocket_upgrade_allowed: desired.websocket_upgrade_allowed,
            description: desired.description.as_deref(),
        };
        apply_and_reconcile(
            client.create_resource(mapping(desired), &body),
            refetch(client, desired),
        )
        .await
    }

    async fn fetch(client: &ConnectorClient, known: &Self) -> Result<Self, CoreError> {
        refetch(client, known).await
    }

    async fn update(
        client: &ConnectorClient,
        _prior: &Self,
        desired: &Self,
    ) -> Result<Self, CoreError> {
        let body = ResourceUpdateRequest {
            enabled: desired.enabled,
            exact_match_only: desired.exact_match_only,
            websocket_upgrade_allowed: desired.websocket_upgrade_allowed,
            description: desired.description.as_deref(),
        };
        apply_and_reconcile(
            client.update_resource(mapping(desired), &desired.id, &body),
            refetch(client, desired),
        )
        .await
    }

    async fn remove(client: &ConnectorClient, known: &Self) -> Result<(), CoreError> {
        client.delete_resource(mapping(known), &known.id).await?;
        Ok(())
    }
}
