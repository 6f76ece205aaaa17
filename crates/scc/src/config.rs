//! CLI configuration: thin wrapper around `scc_config`.
//!
//! Turns `GlobalOpts` flags into the highest-priority override layer.

use clap::ValueEnum;
use scc_config::{Config, Profile};
use scc_core::ConnectionSettings;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use scc_config::config_path;

/// Load the config file and settle the output format: `--output` or
/// `SCC_OUTPUT` first, then `defaults.output`.
pub fn load(global: &mut GlobalOpts) -> Result<Config, CliError> {
    let config = scc_config::load_config(global.config.as_deref())?;
    if global.output.is_none() {
        let format = OutputFormat::from_str(&config.defaults.output, true).map_err(|reason| {
            CliError::Validation {
                field: "defaults.output".into(),
                reason,
            }
        })?;
        global.output = Some(format);
    }
    Ok(config)
}

/// Flags given on the command line, as a sparse profile.
pub fn flag_overrides(global: &GlobalOpts) -> Profile {
    Profile {
        instance_url: global.instance_url.clone(),
        username: global.username.clone(),
        password: global.password.clone(),
        ca_certificate_file: global.ca_certificate_file.clone(),
        client_certificate_file: global.client_certificate_file.clone(),
        client_key_file: global.client_key_file.clone(),
        timeout: global.timeout,
        ..Profile::default()
    }
}

/// Resolve the active profile with env and flag overrides applied.
pub fn resolve_profile(global: &GlobalOpts, config: &Config) -> Result<Profile, CliError> {
    Ok(scc_config::resolve_profile(
        config,
        global.profile.as_deref(),
        &flag_overrides(global),
    )?)
}

/// Build connection settings from config file, profile, env, and flags.
pub fn connection_settings(
    global: &GlobalOpts,
    config: &Config,
) -> Result<ConnectionSettings, CliError> {
    let profile = resolve_profile(global, config)?;
    Ok(profile.into_settings(&config.defaults)?)
}
