//! Error handling.
//!
//! Errors are grouped by concern:
//! - **Initialization**: logger setup
//! - **Lookup**: a single resolver query, split into "no data" and real failures
//! - **Fetch**: a domain's record set could not be collected
//! - **Snapshot**: the snapshot-check workflow, including the precondition
//!   failure and drift, which are reported as separate variants
//!
//! [`exit_code_for`] maps an application error to the process exit code.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, LookupError, SnapshotError};

use crate::config::{EXIT_DIRTY_TREE, EXIT_DRIFT_DETECTED, EXIT_FAILURE};

/// Maps an application error to the process exit code.
///
/// Walks the error chain so context added with `anyhow` does not hide the
/// snapshot outcome.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    let snapshot_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<SnapshotError>());

    match snapshot_error {
        Some(SnapshotError::DriftDetected { .. }) => EXIT_DRIFT_DETECTED,
        Some(SnapshotError::DirtyTree { .. }) => EXIT_DIRTY_TREE,
        _ => EXIT_FAILURE,
    }
}
