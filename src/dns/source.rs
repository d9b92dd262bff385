//! Record sources.
//!
//! [`RecordSource`] is the seam between the fetcher and the resolver. The
//! production implementation wraps `hickory-resolver`; tests script answers.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::Name;
use hickory_resolver::TokioAsyncResolver;

use crate::dns::records::{RecordKind, RecordValue};
use crate::error_handling::LookupError;

/// Answers one record-type query for one domain.
///
/// Implementations normalize answers into [`RecordValue`]s and report "no
/// data" conditions as [`LookupError::NoData`].
#[allow(async_fn_in_trait)] // Queries are awaited in place, never spawned
pub trait RecordSource {
    /// Queries `kind` records for `domain`.
    async fn lookup(&self, domain: &str, kind: RecordKind)
        -> Result<Vec<RecordValue>, LookupError>;
}

/// [`RecordSource`] backed by a `hickory-resolver` instance.
pub struct ResolverSource {
    resolver: TokioAsyncResolver,
}

impl ResolverSource {
    /// Wraps an initialized resolver.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

impl RecordSource for ResolverSource {
    async fn lookup(
        &self,
        domain: &str,
        kind: RecordKind,
    ) -> Result<Vec<RecordValue>, LookupError> {
        // Names the resolver cannot even parse are treated like NXDOMAIN
        let name = match Name::from_utf8(domain) {
            Ok(name) => name,
            Err(e) => {
                log::warn!("Invalid domain name {domain:?}: {e}");
                return Err(LookupError::NoData);
            }
        };

        let lookup = self
            .resolver
            .lookup(name, kind.into())
            .await
            .map_err(classify_resolve_error)?;

        Ok(lookup
            .iter()
            .filter_map(|rdata| RecordValue::from_rdata(kind, rdata))
            .collect())
    }
}

/// Splits resolver errors into "no data" and real failures.
///
/// `NoRecordsFound` covers both an empty answer and NXDOMAIN; `NoConnections`
/// means no nameserver could be reached for the query.
pub(crate) fn classify_resolve_error(error: ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } | ResolveErrorKind::NoConnections => {
            LookupError::NoData
        }
        _ => LookupError::Failed(Box::new(error)),
    }
}
