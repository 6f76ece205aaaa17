use scc_api::ConnectorClient;
use scc_api::types::SystemMappingRequest;

use crate::convert::merge_system_mapping;
use crate::error::CoreError;
use crate::import::ImportId;
use crate::model::SystemMapping;
use crate::reconcile::{IdentityField, Resource, apply_and_reconcile};

async fn refetch(
    client: &ConnectorClient,
    known: &SystemMapping,
) -> Result<SystemMapping, CoreError> {
    let resp = client
        .get_system_mapping(
            &known.region_host,
            &known.subaccount,
            &known.virtual_host,
            &known.virtual_port,
        )
        .await?;
    Ok(merge_system_mapping(known, resp))
}

fn request_body(desired: &SystemMapping) -> SystemMappingRequest<'_> {
    SystemMappingRequest {
        virtual_host: &desired.virtual_host,
        virtual_port: &desired.virtual_port,
        local_host: &desired.local_host,
        local_port: &desired.local_port,
        protocol: &desired.protocol,
        backend_type: &desired.backend_type,
        authentication_mode: desired.authentication_mode.as_deref(),
        host_in_header: desired.host_in_header.as_deref(),
        sid: desired.sid.as_deref(),
        description: desired.description.as_deref(),
    }
}

impl Resource for SystemMapping {
    const KIND: &'static str = "system mapping";
    const IMPORT_SHAPE: &'static [&'static str] =
        &["region_host", "subaccount", "virtual_host", "virtual_port"];

    fn identity(&self) -> Vec<IdentityField> {
        vec![
            IdentityField::new("region_host", &self.region_host),
            IdentityField::new("subaccount", &self.subaccount),
            IdentityField::new("virtual_host", &self.virtual_host),
            IdentityField::new("virtual_port", &self.virtual_port),
        ]
    }

    fn from_import(id: &ImportId) -> Result<Self, CoreError> {
        // Ports travel as strings but must still be numbers.
        id.numeric(3)?;
        Ok(Self {
            region_host: id.field(0).to_owned(),
            subaccount: id.field(1).to_owned(),
            virtual_host: id.field(2).to_owned(),
            virtual_port: id.field(3).to_owned(),
            ..Self::default()
        })
    }

    async fn create(client: &ConnectorClient, desired: &Self) -> Result<Self, CoreError> {
        apply_and_reconcile(
            client.create_system_mapping(
                &desired.region_host,
                &desired.subaccount,
                &request_body(desired),
            ),
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
        apply_and_reconcile(
            client.update_system_mapping(
                &desired.region_host,
                &desired.subaccount,
                &request_body(desired),
            ),
            refetch(client, desired),
        )
        .await
    }

    async fn remove(client: &ConnectorClient, known: &Self) -> Result<(), CoreError> {
        client
            .delete_system_mapping(
                &known.region_host,
                &known.subaccount,
                &known.virtual_host,
                &known.virtual_port,
            )
            .await?;
        Ok(())
    }
}
