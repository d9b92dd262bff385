//! Result rendering.
//!
//! Fetched records are either printed as a human-readable report or
//! accumulated into a [`SnapshotDocument`] for JSON output and snapshot files.

mod document;

use std::io::{self, Write};

pub use document::{DomainSnapshot, SnapshotDocument};

use crate::config::{OutputFormat, NO_RECORD_DATA, SECTION_DIVIDER_WIDTH};
use crate::dns::DomainResult;

/// Renders one domain's records.
///
/// Text mode writes the report for `domain` to `out`. JSON mode writes
/// nothing. In both modes the values are stored in `document`, which the
/// caller serializes once every domain is done.
///
/// # Errors
///
/// Only I/O errors from `out`; missing data never fails.
pub fn render<W: Write>(
    out: &mut W,
    domain: &str,
    result: &DomainResult,
    format: OutputFormat,
    document: &mut SnapshotDocument,
) -> io::Result<()> {
    if format == OutputFormat::Text {
        write_text_report(out, domain, result)?;
    }
    document.insert(domain, result);
    Ok(())
}

/// Writes the text report block for one domain.
pub fn write_text_report<W: Write>(
    out: &mut W,
    domain: &str,
    result: &DomainResult,
) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SECTION_DIVIDER_WIDTH))?;
    writeln!(out, "DNS Records for {domain}")?;
    for (kind, values) in result.iter() {
        writeln!(out, "{}", kind.title())?;
        if values.is_empty() {
            writeln!(out, "  {NO_RECORD_DATA}")?;
        }
        for value in values {
            writeln!(out, "  - {value}")?;
        }
    }
    Ok(())
}
