// Service channel endpoints
//
// Channel ids are allocated by the server on create and are not returned
// by the POST; callers list the collection to recover them.

use tracing::debug;

use crate::client::ConnectorClient;
use crate::error::Error;
use crate::paths::{self, ChannelType};
use crate::types::{ChannelRequest, ChannelResponse, ChannelStateRequest};

impl ConnectorClient {
    /// `GET /subaccounts/{region}/{subaccount}/channels/{type}`
    pub async fn list_channels(
        &self,
        region_host: &str,
        subaccount: &str,
        channel_type: ChannelType,
    ) -> Result<Vec<ChannelResponse>, Error> {
        self.get(paths::channels(region_host, subaccount, channel_type).as_str())
            .await
    }

    /// `POST /subaccounts/{region}/{subaccount}/channels/{type}`
    pub async fn create_channel(
        &self,
        region_host: &str,
        subaccount: &str,
        body: &ChannelRequest<'_>,
    ) -> Result<(), Error> {
        let channel_type = body.target.channel_type();
        debug!(%channel_type, "creating service channel");
        self.post(
            paths::channels(region_host, subaccount, channel_type).as_str(),
            body,
        )
        .await
    }

    /// `GET /subaccounts/{region}/{subaccount}/channels/{type}/{id}`
    pub async fn get_channel(
        &self,
        region_host: &str,
        subaccount: &str,
        channel_type: ChannelType,
        id: u64,
    ) -> Result<ChannelResponse, Error> {
        self.get(paths::channel(region_host, subaccount, channel_type, id).as_str())
            .await
    }

    /// `PUT /subaccounts/{region}/{subaccount}/channels/{type}/{id}`
    pub async fn update_channel(
        &self,
        region_host: &str,
        subaccount: &str,
        id: u64,
        body: &ChannelRequest<'_>,
    ) -> Result<(), Error> {
        let channel_type = body.target.channel_type();
        debug!(%channel_type, id, "updating service channel");
        self.put(
            paths::channel(region_host, subaccount, channel_type, id).as_str(),
            body,
        )
        .await
    }

    /// `PUT /subaccounts/{region}/{subaccount}/channels/{type}/{id}/state`
    pub async fn set_channel_state(
        &self,
        region_host: &str,
        subaccount: &str,
        channel_type: ChannelType,
        id: u64,
        enabled: bool,
    ) -> Result<(), Error> {
        debug!(%channel_type, id, enabled, "setting service channel state");
        self.put(
            paths::channel_state(region_host, subaccount, channel_type, id).as_str(),
            &ChannelStateRequest { enabled },
        )
        .await
    }

    /// `DELETE /subaccounts/{region}/{subaccount}/channels/{type}/{id}`
    pub async fn delete_channel(
        &self,
        region_host: &str,
        subaccount: &str,
        channel_type: ChannelType,
        id: u64,
    ) -> Result<(), Error> {
        debug!(%channel_type, id, "deleting service channel");
        self.delete(paths::channel(region_host, subaccount, channel_type, id).as_str())
            .await
    }
}
