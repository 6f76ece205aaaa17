// Service channels of every type share one implementation; the backend
// type parameter supplies the wire type name and the natural key.

use scc_api::ConnectorClient;
use scc_api::types::ChannelRequest;

use crate::convert::merge_channel;
use crate::error::CoreError;
use crate::import::ImportId;
use crate::model::{ChannelTarget, ServiceChannel};
use crate::reconcile::{
    IdentityField, Resource, apply_and_reconcile, find_by_natural_key, toggle_on_create,
    toggle_on_update,
};

fn require_id<T: ChannelTarget>(channel: &ServiceChannel<T>) -> Result<u64, CoreError> {
    channel.id.ok_or(CoreError::MissingIdentity {
        kind: T::KIND,
        field: "id",
    })
}

fn request_body<T: ChannelTarget>(desired: &ServiceChannel<T>) -> ChannelRequest<'_> {
    ChannelRequest {
        target: desired.target.to_wire(),
        port: desired.port,
        connections: desired.connections,
        comment: desired.comment.as_deref(),
    }
}

async fn refetch<T: ChannelTarget>(
    client: &ConnectorClient,
    known: &ServiceChannel<T>,
) -> Result<ServiceChannel<T>, CoreError> {
    let id = require_id(known)?;
    let resp = client
        .get_channel(&known.region_host, &known.subaccount, T::CHANNEL_TYPE, id)
        .await?;
    Ok(merge_channel(known, resp))
}

/// Recover the server-assigned id of a freshly created channel.
async fn locate<T: ChannelTarget>(
    client: &ConnectorClient,
    desired: &ServiceChannel<T>,
) -> Result<ServiceChannel<T>, CoreError> {
    let all = client
        .list_channels(&desired.region_host, &desired.subaccount, T::CHANNEL_TYPE)
        .await?;
    let found = find_by_natural_key(
        all,
        T::response_key,
        desired.target.natural_key(),
        T::KIND,
        T::KEY_NAME,
    )?;
    let mut seed = desired.clone();
    seed.id = None;
    Ok(merge_channel(&seed, found))
}

async fn apply_toggle<T: ChannelTarget>(
    client: &ConnectorClient,
    known: &ServiceChannel<T>,
    enabled: bool,
) -> Result<ServiceChannel<T>, CoreError> {
    let id = require_id(known)?;
    apply_and_reconcile(
        client.set_channel_state(
            &known.region_host,
            &known.subaccount,
            T::CHANNEL_TYPE,
            id,
            enabled,
        ),
        refetch(client, known),
    )
    .await
}

impl<T: ChannelTarget> Resource for ServiceChannel<T> {
    const KIND: &'static str = T::KIND;
    const IMPORT_SHAPE: &'static [&'static str] = &["region_host", "subaccount", "id"];

    fn identity(&self) -> Vec<IdentityField> {
        vec![
            IdentityField::new("region_host", &self.region_host),
            IdentityField::new("subaccount", &self.subaccount),
            IdentityField::assigned("id", self.id),
        ]
    }

    fn from_import(id: &ImportId) -> Result<Self, CoreError> {
        Ok(Self {
            region_host: id.field(0).to_owned(),
            subaccount: id.field(1).to_owned(),
            id: Some(id.numeric(2)?),
            ..Self::default()
        })
    }

    async fn create(client: &ConnectorClient, desired: &Self) -> Result<Self, CoreError> {
        let created = apply_and_reconcile(
            client.create_channel(
                &desired.region_host,
                &desired.subaccount,
                &request_body(desired),
            ),
            locate(client, desired),
        )
        .await?;

        match toggle_on_create(desired.enabled) {
            Some(enabled) => apply_toggle(client, &created, enabled).await,
            None => Ok(created),
        }
    }

    async fn fetch(client: &ConnectorClient, known: &Self) -> Result<Self, CoreError> {
        refetch(client, known).await
    }

    async fn update(
        client: &ConnectorClient,
        prior: &Self,
        desired: &Self,
    ) -> Result<Self, CoreError> {
        let mut target = desired.clone();
        target.id = prior.id.or(desired.id);
        let id = require_id(&target)?;

        client
            .update_channel(&target.region_host, &target.subaccount, id, &request_body(&target))
            .await?;

        match toggle_on_update(prior.enabled, desired.enabled) {
            Some(enabled) => apply_toggle(client, &target, enabled).await,
            None => refetch(client, &target).await,
        }
    }

    async fn remove(client: &ConnectorClient, known: &Self) -> Result<(), CoreError> {
        let id = require_id(known)?;
        client
            .delete_channel(&known.region_host, &known.subaccount, T::CHANNEL_TYPE, id)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{HanaChannel, K8sChannel};
    use crate::reconcile::ensure_identity_unchanged;

    #[test]
    fn import_populates_identity() {
        let id = ImportId::parse(
            K8sChannel::KIND,
            K8sChannel::IMPORT_SHAPE,
            "region,subaccount,42",
        )
        .unwrap();
        let seed = K8sChannel::from_import(&id).unwrap();
        assert_eq!(seed.region_host, "region");
        assert_eq!(seed.subaccount, "subaccount");
        assert_eq!(seed.id, Some(42));
    }

    #[test]
    fn import_rejects_non_numeric_id() {
        let id = ImportId::parse(
            HanaChannel::KIND,
            HanaChannel::IMPORT_SHAPE,
            "region,subaccount,abc",
        )
        .unwrap();
        let err = HanaChannel::from_import(&id).unwrap_err();
        assert!(matches!(err, CoreError::MalformedImportIdentifier { .. }));
    }

    #[test]
    fn unknown_desired_id_inherits_prior() {
        let prior = K8sChannel {
            region_host: "cf.eu10.hana.ondemand.com".into(),
            subaccount: "sub".into(),
            id: Some(7),
            ..K8sChannel::default()
        };
        let mut desired = prior.clone();
        desired.id = None;
        assert!(ensure_identity_unchanged(&prior, &desired).is_ok());

        desired.id = Some(8);
        let err = ensure_identity_unchanged(&prior, &desired).unwrap_err();
        assert!(matches!(err, CoreError::IdentityMismatch { field: "id", .. }));
    }

    #[test]
    fn missing_id_is_reported_before_any_call() {
        let channel = K8sChannel::default();
        let err = require_id(&channel).unwrap_err();
        assert!(matches!(err, CoreError::MissingIdentity { field: "id", .. }));
    }
}
