// Domain mapping endpoints
//
// The connector has no single-item GET for domain mappings; callers list
// the collection and pick by internal domain.

use tracing::debug;

use crate::client::ConnectorClient;
use crate::error::Error;
use crate::paths;
use crate::types::{DomainMappingRequest, DomainMappingResponse};

impl ConnectorClient {
    /// `GET /subaccounts/{region}/{subaccount}/domainMappings`
    pub async fn list_domain_mappings(
        &self,
        region_host: &str,
        subaccount: &str,
    ) -> Result<Vec<DomainMappingResponse>, Error> {
        self.get(paths::domain_mappings(region_host, subaccount).as_str())
            .await
    }

    /// `POST /subaccounts/{region}/{subaccount}/domainMappings`
    pub async fn create_domain_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        body: &DomainMappingRequest<'_>,
    ) -> Result<(), Error> {
        debug!(internal_domain = body.internal_domain, "creating domain mapping");
        self.post(paths::domain_mappings(region_host, subaccount).as_str(), body)
            .await
    }

    /// `PUT /subaccounts/{region}/{subaccount}/domainMappings/{internalDomain}`
    pub async fn update_domain_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        internal_domain: &str,
        body: &DomainMappingRequest<'_>,
    ) -> Result<(), Error> {
        debug!(internal_domain, "updating domain mapping");
        self.put(
            paths::domain_mapping(region_host, subaccount, internal_domain).as_str(),
            body,
        )
        .await
    }

    /// `DELETE /subaccounts/{region}/{subaccount}/domainMappings/{internalDomain}`
    pub async fn delete_domain_mapping(
        &self,
        region_host: &str,
        subaccount: &str,
        internal_domain: &str,
    ) -> Result<(), Error> {
        debug!(internal_domain, "deleting domain mapping");
        self.delete(paths::domain_mapping(region_host, subaccount, internal_domain).as_str())
            .await
    }
}
