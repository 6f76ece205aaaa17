//! Create / read / update / delete / import for any resource kind.
//!
//! On failure the core error is also rendered as a `Diagnostic` on stdout,
//! so a host driving the binary gets a structured result either way.

use serde::Serialize;
use serde::de::DeserializeOwned;

use scc_core::{CoreError, Diagnostic, Provider, Resource};

use super::util::read_record;
use crate::cli::{GlobalOpts, LifecycleCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle<R>(
    cmd: LifecycleCommand,
    provider: &Provider,
    global: &GlobalOpts,
) -> Result<(), CliError>
where
    R: Resource + Serialize + DeserializeOwned,
{
    let reconciler = provider.reconciler();

    let result: Result<R, CoreError> = match cmd {
        LifecycleCommand::Create { desired } => {
            let desired: R = read_record(&desired)?;
            reconciler.create(&desired).await
        }
        LifecycleCommand::Read { known } => {
            let known: R = read_record(&known)?;
            reconciler.read(&known).await
        }
        LifecycleCommand::Update { prior, desired } => {
            let prior: R = read_record(&prior)?;
            let desired: R = read_record(&desired)?;
            reconciler.update(&prior, &desired).await
        }
        LifecycleCommand::Delete { known } => {
            let known: R = read_record(&known)?;
            reconciler.delete(&known).await
        }
        LifecycleCommand::Import { id } => reconciler.import::<R>(&id).await,
    };

    match result {
        Ok(record) => output::emit(global.output_format(), &record, global.quiet),
        Err(err) => {
            output::emit(global.output_format(), &Diagnostic::from(&err), global.quiet)?;
            Err(err.into())
        }
    }
}
