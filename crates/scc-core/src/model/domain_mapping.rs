// ── Domain mapping domain types ──

use serde::{Deserialize, Serialize};

/// Rewrite of an internal domain to the virtual domain exposed to the cloud.
///
/// `internal_domain` is the natural key within a subaccount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMapping {
    pub region_host: String,
    pub subaccount: String,
    pub internal_domain: String,
    pub virtual_domain: String,
}
