//! Serializable snapshot documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::config::JSON_INDENT;
use crate::dns::{DomainResult, RecordKind, RecordValue};

/// Records of one domain inside a [`SnapshotDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSnapshot {
    /// Values per record kind. Kinds without values are left out.
    pub records: BTreeMap<RecordKind, Vec<RecordValue>>,
}

/// Domain to records mapping, in the exact shape written to snapshot files
/// and printed in JSON mode:
///
/// ```json
/// {"example.com": {"records": {"A": ["93.184.216.34"]}}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotDocument {
    domains: BTreeMap<String, DomainSnapshot>,
}

impl SnapshotDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records of `domain` from `result`, replacing any earlier
    /// entry for the same domain.
    ///
    /// The domain entry is created even when `result` has no data, so
    /// requested domains are always present. Record kinds without values are
    /// left out.
    pub fn insert(&mut self, domain: &str, result: &DomainResult) {
        let records = result
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(kind, values)| (kind, values.to_vec()))
            .collect();
        self.domains
            .insert(domain.to_string(), DomainSnapshot { records });
    }

    /// Records of one domain, if it was inserted.
    pub fn domain(&self, domain: &str) -> Option<&DomainSnapshot> {
        self.domains.get(domain)
    }

    /// Domains in the document, sorted.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Number of domains in the document.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// True when no domain was inserted.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Serializes with sorted keys at every level and two-space indentation.
    ///
    /// Going through `serde_json::Value` sorts record kinds alphabetically
    /// (`A, AAAA, CNAME, MX, ...`) rather than in query order. No trailing
    /// newline.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let value = serde_json::to_value(self)?;

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;

        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses a document previously written by [`Self::to_pretty_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
