// ── Domain model ──
//
// Desired-state records, one per resource kind. Each record carries
// identity fields (set by the caller, never overwritten by a response)
// and observed fields (always taken from the latest response).

pub mod channel;
pub mod domain_mapping;
pub mod subaccount;
pub mod system_mapping;

pub use channel::{
    AbapCloudChannel, AbapCloudTarget, ChannelStatus, ChannelTarget, HanaChannel, HanaTarget,
    K8sChannel, K8sTarget, ServiceChannel,
};
pub use domain_mapping::DomainMapping;
pub use subaccount::{Subaccount, SubaccountCertificate, SubaccountSummary, TunnelStatus};
pub use system_mapping::{SystemMapping, SystemMappingResource};
