use scc_api::ConnectorClient;
use scc_api::types::{SubaccountCreateRequest, SubaccountUpdateRequest};

use crate::convert::merge_subaccount;
use crate::error::CoreError;
use crate::import::ImportId;
use crate::model::Subaccount;
use crate::reconcile::{
    IdentityField, Resource, apply_and_reconcile, toggle_on_create, toggle_on_update,
};

const KIND: &str = "subaccount";

async fn refetch(client: &ConnectorClient, known: &Subaccount) -> Result<Subaccount, CoreError> {
    let resp = client
        .get_subaccount(&known.region_host, &known.subaccount)
        .await?;
    Ok(merge_subaccount(known, resp))
}

/// Apply a tunnel toggle, then read back the canonical record.
async fn apply_toggle(
    client: &ConnectorClient,
    known: Subaccount,
    toggle: Option<bool>,
) -> Result<Subaccount, CoreError> {
    let Some(connected) = toggle else {
        return Ok(known);
    };
    apply_and_reconcile(
        client.set_subaccount_state(&known.region_host, &known.subaccount, connected),
        refetch(client, &known),
    )
    .await
}

impl Resource for Subaccount {
    const KIND: &'static str = KIND;
    const IMPORT_SHAPE: &'static [&'static str] = &["region_host", "subaccount"];

    fn identity(&self) -> Vec<IdentityField> {
        vec![
            IdentityField::new("region_host", &self.region_host),
            IdentityField::new("subaccount", &self.subaccount),
        ]
    }

    fn from_import(id: &ImportId) -> Result<Self, CoreError> {
        Ok(Self {
            region_host: id.field(0).to_owned(),
            subaccount: id.field(1).to_owned(),
            ..Self::default()
        })
    }

    async fn create(client: &ConnectorClient, desired: &Self) -> Result<Self, CoreError> {
        let cloud_user = desired.cloud_user.as_deref().ok_or(CoreError::MissingField {
            kind: KIND,
            field: "cloud_user",
        })?;
        let cloud_password = desired
            .cloud_password
            .as_deref()
            .ok_or(CoreError::MissingField {
                kind: KIND,
                field: "cloud_password",
            })?;

        let body = SubaccountCreateRequest {
            region_host: &desired.region_host,
            subaccount: &desired.subaccount,
            cloud_user,
            cloud_password,
            location_id: desired.location_id.as_deref(),
            display_name: desired.display_name.as_deref(),
            description: desired.description.as_deref(),
        };
        let created =
            apply_and_reconcile(client.create_subaccount(&body), refetch(client, desired)).await?;

        apply_toggle(client, created, toggle_on_create(desired.connected)).await
    }

    async fn fetch(client: &ConnectorClient, known: &Self) -> Result<Self, CoreError> {
        refetch(client, known).await
    }

    async fn update(
        client: &ConnectorClient,
        prior: &Self,
        desired: &Self,
    ) -> Result<Self, CoreError> {
        let body = SubaccountUpdateRequest {
            location_id: desired.location_id.as_deref(),
            display_name: desired.display_name.as_deref(),
            description: desired.description.as_deref(),
        };
        client
            .update_subaccount(&desired.region_host, &desired.subaccount, &body)
            .await?;

        match toggle_on_update(prior.connected, desired.connected) {
            Some(connected) => apply_toggle(client, desired.clone(), Some(connected)).await,
            None => refetch(client, desired).await,
        }
    }

    async fn remove(client: &ConnectorClient, known: &Self) -> Result<(), CoreError> {
        client
            .delete_subaccount(&known.region_host, &known.subaccount)
            .await?;
        Ok(())
    }
}
