//! Output formatting: JSON, compact JSON, YAML.
//!
//! Records and diagnostics are rendered in the format selected by
//! `--output`, falling back to `defaults.output` from the config file.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render any serde-serializable value in the chosen format.
pub fn render<T: Serialize + ?Sized>(format: OutputFormat, data: &T) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    };
    Ok(rendered)
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", output.trim_end());
}

/// Render and print in one step.
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
    quiet: bool,
) -> Result<(), CliError> {
    print_output(&render(format, data)?, quiet);
    Ok(())
}
