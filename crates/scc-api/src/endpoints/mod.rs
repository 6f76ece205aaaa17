// Endpoint groups, implemented as inherent methods on `ConnectorClient`.

mod channels;
mod connector;
mod domain_mappings;
pub mod resources;
mod subaccounts;
mod system_mappings;
