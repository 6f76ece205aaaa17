//! Command handlers, one module per command group.

pub mod config_cmd;
mod lifecycle;
mod list;
mod util;

use scc_core::{
    AbapCloudChannel, DomainMapping, HanaChannel, K8sChannel, Provider, Subaccount,
    SystemMapping, SystemMappingResource, data_sources,
};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Route a connector-bound command to its handler.
pub async fn dispatch(
    cmd: Command,
    provider: &Provider,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Subaccount(args) => {
            lifecycle::handle::<Subaccount>(args.command, provider, global).await
        }
        Command::DomainMapping(args) => {
            lifecycle::handle::<DomainMapping>(args.command, provider, global).await
        }
        Command::SystemMapping(args) => {
            lifecycle::handle::<SystemMapping>(args.command, provider, global).await
        }
        Command::SystemMappingResource(args) => {
            lifecycle::handle::<SystemMappingResource>(args.command, provider, global).await
        }
        Command::K8sChannel(args) => {
            lifecycle::handle::<K8sChannel>(args.command, provider, global).await
        }
        Command::AbapCloudChannel(args) => {
            lifecycle::handle::<AbapCloudChannel>(args.command, provider, global).await
        }
        Command::HanaChannel(args) => {
            lifecycle::handle::<HanaChannel>(args.command, provider, global).await
        }
        Command::List(args) => list::handle(args.command, provider, global).await,
        Command::Version => {
            let version = data_sources::connector_version(provider.client()).await?;
            let version = serde_json::json!({ "version": version });
            output::emit(global.output_format(), &version, global.quiet)
        }
        // Handled in main before a session is configured
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
