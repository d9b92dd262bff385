//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, report layout, exit codes)
//! - Option types shared by the CLI and the library API

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    FetchConfig, LogFormat, LogLevel, OutputFormat, ResolverSettings, SnapshotConfig,
};
