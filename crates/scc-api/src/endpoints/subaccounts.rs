// Subaccount endpoints
//
// A subaccount is the tunnel between the connector and one cloud
// subaccount. Its connect/disconnect toggle lives on a `/state` sub-path.

use tracing::debug;

use crate::client::ConnectorClient;
use crate::error::Error;
use crate::paths;
use crate::types::{
    SubaccountCreateRequest, SubaccountResponse, SubaccountStateRequest, SubaccountSummary,
    SubaccountUpdateRequest,
};

impl ConnectorClient {
    /// `GET /subaccounts`
    pub async fn list_subaccounts(&self) -> Result<Vec<SubaccountSummary>, Error> {
        debug!("listing subaccounts");
        self.get(paths::subaccounts().as_str()).await
    }

    /// `POST /subaccounts`
    pub async fn create_subaccount(&self, body: &SubaccountCreateRequest<'_>) -> Result<(), Error> {
        debug!(region_host = body.region_host, subaccount = body.subaccount, "creating subaccount");
        self.post(paths::subaccounts().as_str(), body).await
    }

    /// `GET /subaccounts/{region}/{subaccount}`
    pub async fn get_subaccount(
        &self,
        region_host: &str,
        subaccount: &str,
    ) -> Result<SubaccountResponse, Error> {
        self.get(paths::subaccount(region_host, subaccount).as_str())
            .await
    }

    /// `PUT /subaccounts/{region}/{subaccount}`
    pub async fn update_subaccount(
        &self,
        region_host: &str,
        subaccount: &str,
        body: &SubaccountUpdateRequest<'_>,
    ) -> Result<(), Error> {
        debug!(region_host, subaccount, "updating subaccount");
        self.put(paths::subaccount(region_host, subaccount).as_str(), body)
            .await
    }

    /// `PUT /subaccounts/{region}/{subaccount}/state`
    pub async fn set_subaccount_state(
        &self,
        region_host: &str,
        subaccount: &str,
        connected: bool,
    ) -> Result<(), Error> {
        debug!(region_host, subaccount, connected, "setting subaccount tunnel state");
        self.put(
            paths::subaccount_state(region_host, subaccount).as_str(),
            &SubaccountStateRequest { connected },
        )
        .await
    }

    /// `DELETE /subaccounts/{region}/{subaccount}`
    pub async fn delete_subaccount(
        &self,
        region_host: &str,
        subaccount: &str,
    ) -> Result<(), Error> {
        debug!(region_host, subaccount, "deleting subaccount");
        self.delete(paths::subaccount(region_host, subaccount).as_str())
            .await
    }
}
