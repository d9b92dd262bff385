//! DNS record fetching and normalization.
//!
//! This module queries a fixed set of record types using `hickory-resolver`:
//! - A, AAAA, MX, CNAME, NS, SOA and TXT, in that order
//! - MX answers become `{preference, exchange}` pairs
//! - TXT answers become their decoded character-strings
//! - everything else becomes its presentation text
//!
//! Queries run one after another. "No data" conditions (empty answer,
//! NXDOMAIN, unreachable nameservers) produce empty lists; any other failure
//! aborts the domain's fetch.

mod fetch;
mod records;
mod source;

// Re-export public API
pub use fetch::fetch_domain;
pub use records::{record_title, DomainResult, RecordKind, RecordValue};
pub use source::{RecordSource, ResolverSource};
