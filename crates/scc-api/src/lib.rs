// scc-api: Async Rust client for the Cloud Connector administrative REST API

pub mod auth;
pub mod client;
pub mod codec;
pub mod endpoints;
pub mod error;
pub mod paths;
pub mod transport;
pub mod types;

pub use auth::{AuthMode, Credentials};
pub use client::ConnectorClient;
pub use codec::encode_segment;
pub use endpoints::resources::MappingRef;
pub use error::{ConfigError, CredentialField, Error};
pub use paths::{ChannelType, EndpointPath};
pub use transport::{ConnectionSettings, TransportConfig, ValidatedSettings};
