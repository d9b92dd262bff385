//! Command entry points.
//!
//! Each command builds its resources, runs the domains sequentially and
//! returns an `anyhow` error for `main` to turn into an exit code.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use log::info;

use crate::config::{FetchConfig, OutputFormat, SnapshotConfig};
use crate::dns::{fetch_domain, RecordSource, ResolverSource};
use crate::initialization::init_resolver;
use crate::render::{render, SnapshotDocument};
use crate::snapshot::{snapshot_check, GitTreeStatus, SnapshotReport};

/// Runs the `fetch` command, printing to stdout.
///
/// # Errors
///
/// Returns an error if no domains are given, if any domain's fetch fails, or
/// if stdout cannot be written.
pub async fn run_fetch(config: FetchConfig) -> Result<()> {
    if config.domains.is_empty() {
        bail!("no domains given");
    }

    let source = ResolverSource::new(init_resolver(&config.resolver));
    let mut stdout = io::stdout();
    fetch_and_render(&source, &config.domains, config.format, &mut stdout).await?;
    Ok(())
}

/// Fetches and renders every domain in order.
///
/// Text reports are written as each domain completes, so a failure leaves the
/// reports of earlier domains in `out`. The JSON document is written once,
/// after the last domain; a failure means no JSON at all.
///
/// Returns the accumulated document.
pub async fn fetch_and_render<S, W>(
    source: &S,
    domains: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<SnapshotDocument>
where
    S: RecordSource,
    W: Write,
{
    let mut document = SnapshotDocument::new();

    for domain in domains {
        let result = fetch_domain(source, domain).await?;
        render(out, domain, &result, format, &mut document)
            .context("Failed to write report")?;
    }

    if format == OutputFormat::Json {
        let json = document
            .to_pretty_json()
            .context("Failed to serialize records")?;
        writeln!(out, "{json}").context("Failed to write report")?;
    }
    out.flush().context("Failed to write report")?;

    Ok(document)
}

/// Runs the `snapshot-check` command against the configured git working tree.
///
/// # Errors
///
/// Returns an error if no domains are given or the directory does not exist,
/// and otherwise any [`crate::SnapshotError`] from the workflow, including
/// drift.
pub async fn run_snapshot_check(config: SnapshotConfig) -> Result<SnapshotReport> {
    if config.domains.is_empty() {
        bail!("no domains given");
    }
    if !config.git_dir.is_dir() {
        bail!(
            "snapshot directory {} does not exist",
            config.git_dir.display()
        );
    }

    let source = ResolverSource::new(init_resolver(&config.resolver));
    let status = GitTreeStatus::new();

    info!(
        "Checking {} domain(s) against {}",
        config.domains.len(),
        config.git_dir.display()
    );
    let report = snapshot_check(&source, &status, &config.git_dir, &config.domains).await?;
    Ok(report)
}
