use scc_api::ConnectorClient;
use scc_api::types::DomainMappingRequest;

use super::absent_as_not_found;
use crate::convert::merge_domain_mapping;
use crate::error::CoreError;
use crate::import::ImportId;
use crate::model::DomainMapping;
use crate::reconcile::{IdentityField, Resource, apply_and_reconcile, find_by_natural_key};

const KIND: &str = "domain mapping";

/// List the subaccount's mappings and pick the one for `internal_domain`.
async fn lookup(
    client: &ConnectorClient,
    known: &DomainMapping,
) -> Result<DomainMapping, CoreError> {
    let all = client
        .list_domain_mappings(&known.region_host, &known.subaccount)
        .await?;
    let found = find_by_natural_key(
        all,
        |m| Some(m.internal_domain.as_str()),
        &known.internal_domain,
        KIND,
        "internal_domain",
    )?;
    Ok(merge_domain_mapping(known, found))
}

fn request_body(desired: &DomainMapping) -> DomainMappingRequest<'_> {
    DomainMappingRequest {
        virtual_domain: &desired.virtual_domain,
        internal_domain: &desired.internal_domain,
    }
}

impl Resource for DomainMapping {
    const KIND: &'static str = KIND;
    const IMPORT_SHAPE: &'static [&'static str] = &["region_host", "subaccount", "internal_domain"];

    fn identity(&self) -> Vec<IdentityField> {
        vec![
            IdentityField::new("region_host", &self.region_host),
            IdentityField::new("subaccount", &self.subaccount),
            IdentityField::new("internal_domain", &self.internal_domain),
        ]
    }

    fn from_import(id: &ImportId) -> Result<Self, CoreError> {
        Ok(Self {
            region_host: id.field(0).to_owned(),
            subaccount: id.field(1).to_owned(),
            internal_domain: id.field(2).to_owned(),
            virtual_domain: String::new(),
        })
    }

    async fn create(client: &ConnectorClient, desired: &Self) -> Result<Self, CoreError> {
        apply_and_reconcile(
            client.create_domain_mapping(
                &desired.region_host,
                &desired.subaccount,
                &request_body(desired),
            ),
            lookup(client, desired),
        )
        .await
    }

    async fn fetch(client: &ConnectorClient, known: &Self) -> Result<Self, CoreError> {
        lookup(client, known)
            .await
            .map_err(|e| absent_as_not_found(e, KIND, known.internal_domain.clone()))
    }

    async fn update(
        client: &ConnectorClient,
        _prior: &Self,
        desired: &Self,
    ) -> Result<Self, CoreError> {
        apply_and_reconcile(
            client.update_domain_mapping(
                &desired.region_host,
                &desired.subaccount,
                &desired.internal_domain,
                &request_body(desired),
            ),
            lookup(client, desired),
        )
        .await
    }

    async fn remove(client: &ConnectorClient, known: &Self) -> Result<(), CoreError> {
        client
            .delete_domain_mapping(&known.region_host, &known.subaccount, &known.internal_domain)
            .await?;
        Ok(())
    }
}
