//! DNS snapshots in a git working tree.
//!
//! This module provides:
//! - The snapshot-check workflow (clean check, write, drift check)
//! - The `TreeStatus` seam and its `git` implementation

mod guard;
mod status;

// Re-export public API
pub use guard::{snapshot_check, snapshot_domain, SnapshotReport};
pub use status::{GitTreeStatus, TreeState, TreeStatus};
