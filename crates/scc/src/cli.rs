//! Clap derive structures for the `scc` CLI.
//!
//! Every managed kind gets the same five lifecycle verbs. Records go in
//! and come out as JSON (or YAML), so the binary can sit behind any
//! declarative host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// scc -- declarative configuration for SAP Cloud Connector
#[derive(Debug, Parser)]
#[command(
    name = "scc",
    version,
    about = "Manage SAP Cloud Connector configuration from the command line",
    long_about = "Create, read, update, delete and import Cloud Connector configuration\n\
        (subaccounts, domain mappings, system mappings, resources and service\n\
        channels) through the connector's administrative REST API.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Connector profile to use
    #[arg(long, short = 'p', env = "SCC_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "SCC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Connector base URL, e.g. https://scc.example.com:8443 (overrides profile)
    #[arg(long, short = 'u', global = true)]
    pub instance_url: Option<String>,

    /// Username for basic authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true, hide = true)]
    pub password: Option<String>,

    /// PEM file with CA certificates trusted for the connector
    #[arg(long, global = true)]
    pub ca_certificate_file: Option<PathBuf>,

    /// PEM client certificate for mutual TLS
    #[arg(long, global = true)]
    pub client_certificate_file: Option<PathBuf>,

    /// PEM private key for mutual TLS
    #[arg(long, global = true)]
    pub client_key_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format [default: `defaults.output` from the config file, else json]
    #[arg(long, short = 'o', env = "SCC_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

impl GlobalOpts {
    /// Selected output format. `config::load` fills in the config file's
    /// default when no flag was given.
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Subaccount tunnels
    #[command(alias = "sa")]
    Subaccount(KindArgs),

    /// Domain mappings of a subaccount
    #[command(alias = "dm")]
    DomainMapping(KindArgs),

    /// System mappings (virtual host:port to backend)
    #[command(alias = "sm")]
    SystemMapping(KindArgs),

    /// URL path resources exposed through a system mapping
    #[command(alias = "resource")]
    SystemMappingResource(KindArgs),

    /// Kubernetes service channels
    K8sChannel(KindArgs),

    /// ABAP Cloud service channels
    AbapCloudChannel(KindArgs),

    /// HANA service channels
    HanaChannel(KindArgs),

    /// Read-only listings
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the connector version
    Version,

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LIFECYCLE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct KindArgs {
    #[command(subcommand)]
    pub command: LifecycleCommand,
}

/// Record files are JSON, or YAML when the extension is `.yaml`/`.yml`.
/// `-` reads from stdin.
#[derive(Debug, Subcommand)]
pub enum LifecycleCommand {
    /// Create from a desired-state record
    Create {
        #[arg(value_name = "FILE")]
        desired: PathBuf,
    },

    /// Refresh a known record from the connector
    Read {
        #[arg(value_name = "FILE")]
        known: PathBuf,
    },

    /// Apply a desired record over the last known one
    Update {
        /// Last known record
        #[arg(long, value_name = "FILE")]
        prior: PathBuf,

        /// Desired record
        #[arg(value_name = "FILE")]
        desired: PathBuf,
    },

    /// Delete a known record
    #[command(alias = "rm")]
    Delete {
        #[arg(value_name = "FILE")]
        known: PathBuf,
    },

    /// Adopt an existing object by its comma-separated identity
    Import {
        /// e.g. `cf.eu10.hana.ondemand.com,<subaccount>,42`
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LISTINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: ListCommand,
}

#[derive(Debug, Args)]
pub struct SubaccountRef {
    /// Region host, e.g. cf.eu10.hana.ondemand.com
    #[arg(long, short = 'r')]
    pub region_host: String,

    /// Subaccount id
    #[arg(long, short = 's')]
    pub subaccount: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChannelKind {
    K8s,
    AbapCloud,
    Hana,
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// All subaccounts
    Subaccounts,

    /// Domain mappings of a subaccount
    DomainMappings(SubaccountRef),

    /// System mappings of a subaccount
    SystemMappings(SubaccountRef),

    /// Resources of one system mapping
    Resources {
        #[command(flatten)]
        subaccount: SubaccountRef,

        #[arg(long)]
        virtual_host: String,

        #[arg(long)]
        virtual_port: String,
    },

    /// Service channels of one type
    Channels {
        #[command(flatten)]
        subaccount: SubaccountRef,

        #[arg(long = "type", value_enum)]
        kind: ChannelKind,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the resolved profile (secrets redacted)
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
