//! Configuration constants.
//!
//! This module defines the defaults and fixed values used throughout the application:
//! resolver timeouts, report layout and process exit codes.

/// DNS query timeout in seconds
/// Snapshots run unattended, so a slow nameserver is given time rather than
/// being recorded as an empty answer.
pub const DNS_TIMEOUT_SECS: u64 = 20;

/// Port used when nameservers are given explicitly on the command line
pub const DNS_PORT: u16 = 53;

// Text report layout
/// Width of the `-` divider printed before each domain's report
pub const SECTION_DIVIDER_WIDTH: usize = 60;
/// Printed in place of values when a record type has no data
pub const NO_RECORD_DATA: &str = "No record data";

// Snapshot serialization
/// Indentation used for snapshot files and JSON output
pub const JSON_INDENT: &[u8] = b"  ";

// Process exit codes
/// Any fetch, resolution, I/O or status command failure
pub const EXIT_FAILURE: i32 = 1;
/// Snapshot files changed the working tree (DNS drifted since the last commit)
pub const EXIT_DRIFT_DETECTED: i32 = 3;
/// Snapshot directory had uncommitted changes before anything was written
pub const EXIT_DIRTY_TREE: i32 = 4;
