// ── Provider facade ──
//
// Session-level entry point: configure once with a credential set, then
// hand out reconcilers bound to the resulting client.

use tracing::debug;

use scc_api::{ConnectionSettings, ConnectorClient};

use crate::error::CoreError;
use crate::reconcile::Reconciler;

/// A configured connection to one Cloud Connector instance.
#[derive(Debug, Clone)]
pub struct Provider {
    client: ConnectorClient,
}

impl Provider {
    /// Validate `settings`, build the transport, and probe the connector.
    pub async fn configure(settings: &ConnectionSettings) -> Result<Self, CoreError> {
        let client = ConnectorClient::connect(settings).await?;
        debug!(
            url = %client.base_url(),
            version = client.connector_version().unwrap_or("unknown"),
            "provider configured"
        );
        Ok(Self { client })
    }

    /// Wrap an already-built client (no probe).
    pub fn from_client(client: ConnectorClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ConnectorClient {
        &self.client
    }

    pub fn reconciler(&self) -> Reconciler<'_> {
        Reconciler::new(&self.client)
    }

    /// Version reported by the probe during [`configure`](Self::configure).
    pub fn connector_version(&self) -> Option<&str> {
        self.client.connector_version()
    }
}
