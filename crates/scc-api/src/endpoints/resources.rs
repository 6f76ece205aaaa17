// System mapping resource endpoints
//
// Resource ids are URL paths on the backend (`/sap/opu/odata`) and travel
// through the path codec when they appear in a request path.

use tracing::debug;

use crate::client::ConnectorClient;
use crate::error::Error;
use crate::paths;
use crate::types::{ResourceCreateRequest, ResourceResponse, ResourceUpdateRequest};

/// Parent system mapping of a resource.
#[derive(Debug, Clone, Copy)]
pub struct MappingRef<'a> {
    pub region_host: &'a str,
    pub subaccount: &'a str,
    pub virtual_host: &'a str,
    pub virtual_port: &'a str,
}

impl MappingRef<'_> {
    fn resources_path(&self) -> paths::EndpointPath {
        paths::system_mapping_resources(
            self.region_host,
            self.subaccount,
            self.virtual_host,
            self.virtual_port,
        )
    }

    fn resource_path(&self, resource_id: &str) -> paths::EndpointPath {
        paths::system_mapping_resource(
            self.region_host,
            self.subaccount,
            self.virtual_host,
            self.virtual_port,
            resource_id,
        )
    }
}

impl ConnectorClient {
    /// `GET .../systemMappings/{vhost}:{vport}/resources`
    pub async fn list_resources(
        &self,
        mapping: MappingRef<'_>,
    ) -> Result<Vec<ResourceResponse>, Error> {
        self.get(mapping.resources_path().as_str()).await
    }

    /// `POST .../systemMappings/{vhost}:{vport}/resources`
    pub async fn create_resource(
        &self,
        mapping: MappingRef<'_>,
        body: &ResourceCreateRequest<'_>,
    ) -> Result<(), Error> {
        debug!(resource_id = body.id, "creating system mapping resource");
        self.post(mapping.resources_path().as_str(), body).await
    }

    /// `GET .../resources/{encodedId}`
    pub async fn get_resource(
        &self,
        mapping: MappingRef<'_>,
        resource_id: &str,
    ) -> Result<ResourceResponse, Error> {
        self.get(mapping.resource_path(resource_id).as_str()).await
    }

    /// `PUT .../resources/{encodedId}`
    pub async fn update_resource(
        &self,
        mapping: MappingRef<'_>,
        resource_id: &str,
        body: &ResourceUpdateRequest<'_>,
    ) -> Result<(), Error> {
        debug!(resource_id, "updating system mapping resource");
        self.put(mapping.resource_path(resource_id).as_str(), body)
            .await
    }

    /// `DELETE .../resources/{encodedId}`
    pub async fn delete_resource(
        &self,
        mapping: MappingRef<'_>,
        resource_id: &str,
    ) -> Result<(), Error> {
        debug!(resource_id, "deleting system mapping resource");
        self.delete(mapping.resource_path(resource_id).as_str()).await
    }
}
