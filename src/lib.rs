//! dns_snapshot library: DNS record fetching, reporting and drift detection
//!
//! This library queries a fixed set of record types (A, AAAA, MX, CNAME, NS,
//! SOA, TXT) for each domain, normalizes the answers, renders them as text or
//! JSON, and can snapshot them into a git working tree to detect when live DNS
//! drifts from the committed state.
//!
//! # Example
//!
//! ```no_run
//! use dns_snapshot::{run_snapshot_check, SnapshotConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SnapshotConfig {
//!     domains: vec!["example.com".to_string()],
//!     git_dir: std::path::PathBuf::from("/srv/dns-snapshots"),
//!     ..Default::default()
//! };
//!
//! let report = run_snapshot_check(config).await?;
//! println!("No drift, {} file(s) checked", report.files.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The resolver is async and needs a Tokio runtime, but domains and record
//! types are always processed one at a time.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod render;
mod run;
pub mod snapshot;

// Re-export public API
pub use config::{FetchConfig, LogFormat, LogLevel, OutputFormat, ResolverSettings, SnapshotConfig};
pub use dns::{fetch_domain, DomainResult, RecordKind, RecordSource, RecordValue};
pub use error_handling::{
    exit_code_for, FetchError, InitializationError, LookupError, SnapshotError,
};
pub use render::{render, SnapshotDocument};
pub use run::{fetch_and_render, run_fetch, run_snapshot_check};
pub use snapshot::{snapshot_check, GitTreeStatus, SnapshotReport, TreeState, TreeStatus};
