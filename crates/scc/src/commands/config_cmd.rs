use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &mut GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            let path = global.config.clone().unwrap_or_else(config::config_path);
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let profile = config::resolve_profile(global, &cfg)?;
            let view = serde_json::json!({
                "instance_url": profile.instance_url,
                "username": profile.username,
                "password": profile.password.as_ref().map(|_| "[REDACTED]"),
                "ca_certificate": profile.ca_certificate.as_ref().map(|_| "<inline pem>"),
                "ca_certificate_file": profile.ca_certificate_file,
                "client_certificate": profile.client_certificate.as_ref().map(|_| "<inline pem>"),
                "client_certificate_file": profile.client_certificate_file,
                "client_key": profile.client_key.as_ref().map(|_| "[REDACTED]"),
                "client_key_file": profile.client_key_file,
                "timeout": profile.timeout.unwrap_or(cfg.defaults.timeout),
            });
            output::emit(global.output_format(), &view, global.quiet)
        }
    }
}
