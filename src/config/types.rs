//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the library programmatically.

use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::DNS_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How fetched records are written to standard output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable report block per domain, printed as each domain completes
    #[default]
    Text,
    /// A single pretty-printed document, printed after every domain was fetched
    Json,
}

/// Resolver configuration shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Per-query timeout
    pub timeout: Duration,

    /// Nameservers to query instead of the system configuration.
    /// Empty means "use /etc/resolv.conf" (or the platform equivalent).
    pub nameservers: Vec<IpAddr>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            nameservers: Vec::new(),
        }
    }
}

/// Configuration for the `fetch` command.
///
/// # Examples
///
/// ```no_run
/// use dns_snapshot::{FetchConfig, OutputFormat};
///
/// let config = FetchConfig {
///     domains: vec!["example.com".to_string()],
///     format: OutputFormat::Json,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Domains to query, in output order
    pub domains: Vec<String>,

    /// Output format
    pub format: OutputFormat,

    /// Resolver settings
    pub resolver: ResolverSettings,
}

/// Configuration for the `snapshot-check` command.
#[derive(Debug, Clone, Default)]
pub struct SnapshotConfig {
    /// Domains to snapshot; each one is written to a file of the same name
    pub domains: Vec<String>,

    /// Git working tree that holds the snapshot files
    pub git_dir: PathBuf,

    /// Resolver settings
    pub resolver: ResolverSettings,
}
