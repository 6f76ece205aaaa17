//! Declarative reconciliation of SAP Cloud Connector configuration.
//!
//! This crate sits between `scc-api` and a host that manages desired-state
//! records (the `scc` CLI, or any other driver):
//!
//! - **[`Provider`]**: configures a session once. It validates the credential
//!   set, builds the TLS transport, probes the connector, and hands out
//!   [`Reconciler`]s bound to the resulting client.
//!
//! - **[`Reconciler`]**: create / read / update / delete / import for any
//!   [`Resource`] kind. Identity changes are refused before any network
//!   call; deletes tolerate an already-absent target; every write is
//!   followed by a refetch so the returned record is what the server holds.
//!
//! - **Domain model** ([`model`]): one record per kind, [`Subaccount`],
//!   [`DomainMapping`], [`SystemMapping`], [`SystemMappingResource`] and
//!   the service channels ([`K8sChannel`], [`AbapCloudChannel`],
//!   [`HanaChannel`]).
//!
//! - **[`data_sources`]**: read-only listings.
//!
//! - **[`Diagnostic`]**: host-facing rendering of a [`CoreError`].

pub mod data_sources;
pub mod diagnostic;
pub mod error;
pub mod import;
pub mod model;
pub mod provider;
pub mod reconcile;

mod convert;
mod resources;

// ── Primary re-exports ──────────────────────────────────────────────
pub use diagnostic::{Diagnostic, Severity};
pub use error::CoreError;
pub use import::ImportId;
pub use provider::Provider;
pub use reconcile::{Reconciler, Resource};

pub use model::{
    AbapCloudChannel, AbapCloudTarget, ChannelStatus, ChannelTarget, DomainMapping, HanaChannel,
    HanaTarget, K8sChannel, K8sTarget, ServiceChannel, Subaccount, SubaccountCertificate,
    SubaccountSummary, SystemMapping, SystemMappingResource, TunnelStatus,
};

// Transport types a host needs to configure a session.
pub use scc_api::{AuthMode, ConnectionSettings, ConnectorClient, MappingRef, TransportConfig};
