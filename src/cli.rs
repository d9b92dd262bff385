//! Command-line interface.
//!
//! ```text
//! dns_snapshot fetch --domains <DOMAIN>... [--format text|json]
//! dns_snapshot snapshot-check --domains <DOMAIN>... --git-dir <PATH>
//! ```
//!
//! Logging and resolver options are global and may appear before or after
//! the subcommand.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    FetchConfig, LogFormat, LogLevel, OutputFormat, ResolverSettings, SnapshotConfig,
    DNS_TIMEOUT_SECS,
};

/// Fetch DNS records for a set of domains and detect drift against a git snapshot.
#[derive(Debug, Parser)]
#[command(name = "dns_snapshot", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(
        long,
        default_value_t = DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_seconds: u64,

    /// Nameserver to query instead of the system resolver (repeatable)
    #[arg(long = "nameserver", value_name = "IP", global = true)]
    pub nameservers: Vec<IpAddr>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the DNS records of each domain
    Fetch(FetchArgs),
    /// Write each domain's records into a git working tree and fail on drift
    #[command(name = "snapshot-check")]
    SnapshotCheck(SnapshotArgs),
}

/// Arguments of `fetch`.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Domains to query
    #[arg(long, required = true, num_args = 1.., value_name = "DOMAIN", value_parser = parse_domain)]
    pub domains: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments of `snapshot-check`.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Domains to snapshot; each is written to a file of the same name
    #[arg(long, required = true, num_args = 1.., value_name = "DOMAIN", value_parser = parse_domain)]
    pub domains: Vec<String>,

    /// Git working tree holding the snapshot files
    #[arg(long, value_name = "PATH")]
    pub git_dir: PathBuf,
}

/// A parsed invocation, ready to hand to the library.
#[derive(Debug)]
pub enum Invocation {
    /// `fetch`
    Fetch(FetchConfig),
    /// `snapshot-check`
    SnapshotCheck(SnapshotConfig),
}

impl Cli {
    /// Resolver settings from the global options.
    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            timeout: Duration::from_secs(self.timeout_seconds),
            nameservers: self.nameservers.clone(),
        }
    }

    /// Converts the parsed arguments into library configuration.
    pub fn into_invocation(self) -> Invocation {
        let resolver = self.resolver_settings();
        match self.command {
            Command::Fetch(args) => Invocation::Fetch(FetchConfig {
                domains: args.domains,
                format: args.format,
                resolver,
            }),
            Command::SnapshotCheck(args) => Invocation::SnapshotCheck(SnapshotConfig {
                domains: args.domains,
                git_dir: args.git_dir,
                resolver,
            }),
        }
    }
}

fn parse_domain(s: &str) -> Result<String, String> {
    let domain = s.trim();
    if domain.is_empty() {
        return Err("domain must not be empty".to_string());
    }
    Ok(domain.to_string())
}
