//! Application initialization.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - DNS resolver

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
