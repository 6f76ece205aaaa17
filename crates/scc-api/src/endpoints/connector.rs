use tracing::debug;

use crate::client::ConnectorClient;
use crate::error::Error;
use crate::paths::VERSION_PATH;
use crate::types::VersionResponse;

impl ConnectorClient {
    /// Connector software version.
    ///
    /// `GET /api/v1/connector/version`
    pub async fn get_version(&self) -> Result<VersionResponse, Error> {
        debug!("fetching connector version");
        self.get(VERSION_PATH).await
    }
}
