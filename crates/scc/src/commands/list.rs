use scc_core::{
    AbapCloudTarget, HanaTarget, K8sTarget, MappingRef, Provider, data_sources,
};

use crate::cli::{ChannelKind, GlobalOpts, ListCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    cmd: ListCommand,
    provider: &Provider,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = provider.client();
    let (format, quiet) = (global.output_format(), global.quiet);

    match cmd {
        ListCommand::Subaccounts => {
            let rows = data_sources::list_subaccounts(client).await?;
            output::emit(format, &rows, quiet)
        }
        ListCommand::DomainMappings(sub) => {
            let rows = data_sources::list_domain_mappings(client, &sub.region_host, &sub.subaccount)
                .await?;
            output::emit(format, &rows, quiet)
        }
        ListCommand::SystemMappings(sub) => {
            let rows = data_sources::list_system_mappings(client, &sub.region_host, &sub.subaccount)
                .await?;
            output::emit(format, &rows, quiet)
        }
        ListCommand::Resources {
            subaccount,
            virtual_host,
            virtual_port,
        } => {
            let mapping = MappingRef {
                region_host: &subaccount.region_host,
                subaccount: &subaccount.subaccount,
                virtual_host: &virtual_host,
                virtual_port: &virtual_port,
            };
            let rows = data_sources::list_system_mapping_resources(client, mapping).await?;
            output::emit(format, &rows, quiet)
        }
        ListCommand::Channels { subaccount, kind } => {
            let (region, sub) = (subaccount.region_host.as_str(), subaccount.subaccount.as_str());
            match kind {
                ChannelKind::K8s => {
                    let rows = data_sources::list_channels::<K8sTarget>(client, region, sub).await?;
                    output::emit(format, &rows, quiet)
                }
                ChannelKind::AbapCloud => {
                    let rows =
                        data_sources::list_channels::<AbapCloudTarget>(client, region, sub).await?;
                    output::emit(format, &rows, quiet)
                }
                ChannelKind::Hana => {
                    let rows =
                        data_sources::list_channels::<HanaTarget>(client, region, sub).await?;
                    output::emit(format, &rows, quiet)
                }
            }
        }
    }
}
