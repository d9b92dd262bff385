//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_snapshot` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Mapping errors to exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use clap::Parser;

use dns_snapshot::cli::{Cli, Invocation};
use dns_snapshot::initialization::init_logger_with;
use dns_snapshot::{exit_code_for, run_fetch, run_snapshot_check};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // RUST_LOG may be set in a .env file next to the snapshot repo
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logger_with(cli.log_level.clone().into(), cli.log_format.clone()) {
        eprintln!("dns_snapshot: {e}");
    }

    let result = match cli.into_invocation() {
        Invocation::Fetch(config) => run_fetch(config).await,
        Invocation::SnapshotCheck(config) => run_snapshot_check(config).await.map(|report| {
            log::info!(
                "Snapshot of {} domain(s) in {} matches the committed state",
                report.files.len(),
                report.dir.display()
            );
        }),
    };

    if let Err(e) = result {
        eprintln!("dns_snapshot error: {:#}", e);
        process::exit(exit_code_for(&e));
    }
}
