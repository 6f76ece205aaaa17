use tracing::debug;

use crate::client::ConnectorClient;
use crate::error::Error;
use crate::paths;
use crate::types::{SystemMappingRequest, SystemMappingResponse};

impl ConnectorClient {
    /// `GET /subaccounts/{region}/{subaccount}/systemMappings`
    pub async fn list_system_mappings(
        &self,
        region_host: &str,
        subaccount: &str,
    ) -> Result<Vec<SystemMappingResponse>, Error> {
        self.get(paths::system_mappings(region_host, subaccount).as_str())
            .await
    }

    /// `POST /subaccounts/{region}/{subaccount}/systemMappings`
    pub async fn create_system_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        body: &SystemMappingRequest<'_>,
    ) -> Result<(), Error> {
        debug!(
            virtual_host = body.virtual_host,
            virtual_port = body.virtual_port,
            "creating system mapping"
        );
        self.post(paths::system_mappings(region_host, subaccount).as_str(), body)
            .await
    }

    /// `GET /subaccounts/{region}/{subaccount}/systemMappings/{vhost}:{vport}`
    pub async fn get_system_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        virtual_host: &str,
        virtual_port: &str,
    ) -> Result<SystemMappingResponse, Error> {
        self.get(
            paths::system_mapping(region_host, subaccount, virtual_host, virtual_port).as_str(),
        )
        .await
    }

    /// `PUT /subaccounts/{region}/{subaccount}/systemMappings/{vhost}:{vport}`
    pub async fn update_system_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        body: &SystemMappingRequest<'_>,
    ) -> Result<(), Error> {
        debug!(
            virtual_host = body.virtual_host,
            virtual_port = body.virtual_port,
            "updating system mapping"
        );
        self.put(
            paths::system_mapping(region_host, subaccount, body.virtual_host, body.virtual_port)
                .as_str(),
            body,
        )
        .await
    }

    /// `DELETE /subaccounts/{region}/{subaccount}/systemMappings/{vhost}:{vport}`
    pub async fn delete_system_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        virtual_host: &str,
        virtual_port: &str,
    ) -> Result<(), Error> {
        debug!(virtual_host, virtual_port, "deleting system mapping");
        self.delete(
            paths::system_mapping(region_host, subaccount, virtual_host, virtual_port).as_str(),
        )
        .await
    }
}
