//! Record types and normalized record values.
//!
//! This module defines:
//! - `RecordKind`: the fixed set of record types that are queried, in query order
//! - `RecordValue`: one normalized answer (MX pair, TXT segments, or presentation text)
//! - `DomainResult`: every record kind of one domain mapped to its values

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use hickory_resolver::proto::rr::{RData, RecordType};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

/// A DNS record type that is fetched for every domain.
///
/// Declaration order is the query and display order; `Ord` follows it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Mail exchanger
    Mx,
    /// Canonical name
    Cname,
    /// Nameserver
    Ns,
    /// Start of authority
    Soa,
    /// Text
    Txt,
}

impl RecordKind {
    /// Human-readable title used in text reports.
    pub fn title(self) -> Cow<'static, str> {
        record_title(self.as_ref())
    }
}

impl From<RecordKind> for RecordType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::A => RecordType::A,
            RecordKind::Aaaa => RecordType::AAAA,
            RecordKind::Mx => RecordType::MX,
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Ns => RecordType::NS,
            RecordKind::Soa => RecordType::SOA,
            RecordKind::Txt => RecordType::TXT,
        }
    }
}

/// Looks up the report title for a record type name.
///
/// Names outside the fixed set render as `Unknown {name}`.
pub fn record_title(record_type: &str) -> Cow<'static, str> {
    match record_type {
        "A" => Cow::Borrowed("IPv4 Addresses"),
        "AAAA" => Cow::Borrowed("IPv6 Addresses"),
        "MX" => Cow::Borrowed("Mail Exchanger"),
        "CNAME" => Cow::Borrowed("Canonical Name"),
        "NS" => Cow::Borrowed("Name Servers"),
        "SOA" => Cow::Borrowed("Start of Authority"),
        "TXT" => Cow::Borrowed("Text Records"),
        other => Cow::Owned(format!("Unknown {other}")),
    }
}

/// One normalized DNS answer.
///
/// Serialized untagged: MX as `{"exchange": .., "preference": ..}`, TXT as an
/// array of strings, everything else as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Mail exchanger with its preference
    Mx {
        /// Lower is preferred
        preference: u16,
        /// Exchange host, fully qualified (trailing dot included)
        exchange: String,
    },
    /// TXT character-strings, one entry per segment
    Txt(Vec<String>),
    /// Presentation form of any other record data
    Text(String),
}

impl RecordValue {
    /// Normalizes resolver record data for the queried record kind.
    ///
    /// The shape is picked from `kind`, not from the data. Data of a different
    /// type than the one queried (e.g. the CNAME that led to an A answer)
    /// returns `None`.
    pub fn from_rdata(kind: RecordKind, rdata: &RData) -> Option<Self> {
        match (kind, rdata) {
            (RecordKind::Mx, RData::MX(mx)) => Some(RecordValue::Mx {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            }),
            (RecordKind::Txt, RData::TXT(txt)) => Some(RecordValue::Txt(
                txt.iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect(),
            )),
            (RecordKind::Mx | RecordKind::Txt, _) => None,
            (kind, rdata) if rdata.record_type() == RecordType::from(kind) => {
                Some(RecordValue::Text(rdata.to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Mx {
                preference,
                exchange,
            } => write!(f, "{preference} {exchange}"),
            RecordValue::Txt(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{segment:?}")?;
                }
                Ok(())
            }
            RecordValue::Text(text) => f.write_str(text),
        }
    }
}

/// All record values fetched for one domain.
///
/// Every [`RecordKind`] is present; kinds without data map to an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    records: BTreeMap<RecordKind, Vec<RecordValue>>,
}

impl DomainResult {
    /// Creates a result with an empty list for every record kind.
    pub fn new() -> Self {
        Self {
            records: RecordKind::iter().map(|kind| (kind, Vec::new())).collect(),
        }
    }

    /// Replaces the values of one record kind.
    pub fn set(&mut self, kind: RecordKind, values: Vec<RecordValue>) {
        self.records.insert(kind, values);
    }

    /// Values of one record kind, empty when there was no data.
    pub fn get(&self, kind: RecordKind) -> &[RecordValue] {
        self.records.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates record kinds in the fixed order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (RecordKind, &[RecordValue])> {
        self.records
            .iter()
            .map(|(kind, values)| (*kind, values.as_slice()))
    }

    /// True when no record kind has any value.
    pub fn is_empty(&self) -> bool {
        self.records.values().all(Vec::is_empty)
    }
}

impl Default for DomainResult {
    fn default() -> Self {
        Self::new()
    }
}
