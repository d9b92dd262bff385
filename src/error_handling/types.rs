//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::dns::RecordKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Outcome of a single failed lookup, as reported by a [`crate::dns::RecordSource`].
///
/// "No data" is kept separate from real failures so the fetcher can turn it
/// into an empty record list.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The zone has no records of this type, the domain does not exist, or no
    /// nameserver could be reached for it.
    #[error("no records found")]
    NoData,

    /// Any other resolver fault (malformed response, network error, timeout).
    #[error("{0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error fetching the records of one domain.
#[derive(Error, Debug)]
pub enum FetchError {
    /// A lookup failed with something other than "no data". Remaining record
    /// types for the domain were not queried.
    #[error("{record_type} lookup for {domain} failed: {source}")]
    Resolution {
        /// Domain being fetched
        domain: String,
        /// Record type whose lookup failed
        record_type: RecordKind,
        /// Underlying resolver error
        #[source]
        source: LookupError,
    },
}

/// Error types for the snapshot-check workflow.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot directory had uncommitted changes before anything was
    /// fetched or written.
    #[error("git repo {} is not clean; commit or discard local changes before taking a snapshot", dir.display())]
    DirtyTree {
        /// Snapshot directory
        dir: PathBuf,
    },

    /// Writing the snapshot changed the working tree: live DNS differs from
    /// the last committed snapshot.
    #[error("DNS drift detected in {}: snapshot of {} differs from the committed state", dir.display(), domains.join(", "))]
    DriftDetected {
        /// Snapshot directory
        dir: PathBuf,
        /// Domains written during this run
        domains: Vec<String>,
    },

    /// The version-control status command could not be run or gave an
    /// unexpected exit status.
    #[error("git status check failed in {}: {reason}", dir.display())]
    StatusCommand {
        /// Snapshot directory
        dir: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A domain cannot be used as a file name inside the snapshot directory.
    #[error("domain {0:?} cannot be used as a snapshot file name")]
    InvalidDomain(String),

    /// Fetching a domain's records failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Serializing a snapshot document failed.
    #[error("Snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing a snapshot file failed.
    #[error("Failed to write snapshot file {}: {source}", path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
