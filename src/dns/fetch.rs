//! Per-domain record fetching.

use log::debug;
use strum::IntoEnumIterator;

use crate::dns::records::{DomainResult, RecordKind};
use crate::dns::source::RecordSource;
use crate::error_handling::{FetchError, LookupError};

/// Fetches every [`RecordKind`] for a domain, one query at a time.
///
/// "No data" answers become empty lists. Any other lookup failure aborts the
/// fetch: the remaining record kinds are not queried.
///
/// # Errors
///
/// Returns `FetchError::Resolution` naming the record kind that failed.
pub async fn fetch_domain<S: RecordSource>(
    source: &S,
    domain: &str,
) -> Result<DomainResult, FetchError> {
    let mut result = DomainResult::new();

    for kind in RecordKind::iter() {
        match source.lookup(domain, kind).await {
            Ok(values) => {
                debug!("{kind} lookup for {domain}: {} record(s)", values.len());
                result.set(kind, values);
            }
            Err(LookupError::NoData) => {
                debug!("{kind} lookup for {domain}: no data");
                result.set(kind, Vec::new());
            }
            Err(error) => {
                return Err(FetchError::Resolution {
                    domain: domain.to_string(),
                    record_type: kind,
                    source: error,
                });
            }
        }
    }

    Ok(result)
}
