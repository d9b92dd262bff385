//! The snapshot-check workflow.
//!
//! ```text
//! Idle -> CleanVerified -> Fetching -> Written -> CleanVerified(final)
//! ```
//!
//! The tree must be clean before anything is fetched. After every domain is
//! written the tree is checked again; a dirty tree at that point means the
//! live records differ from the committed snapshot.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::dns::{fetch_domain, RecordSource};
use crate::error_handling::SnapshotError;
use crate::render::SnapshotDocument;
use crate::snapshot::status::{TreeState, TreeStatus};

/// Result of a snapshot-check run that found no drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    /// Snapshot directory
    pub dir: PathBuf,
    /// Snapshot files written, in request order
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Idle,
    CleanVerified,
    Fetching,
    Written,
    FinalCleanVerified,
}

struct Guard<'a> {
    dir: &'a Path,
    state: GuardState,
}

impl<'a> Guard<'a> {
    fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            state: GuardState::Idle,
        }
    }

    fn advance(&mut self, next: GuardState) {
        debug!(
            "snapshot {}: {:?} -> {:?}",
            self.dir.display(),
            self.state,
            next
        );
        self.state = next;
    }

    /// Enters `Fetching` on the first domain and logs every domain fetched.
    fn fetching(&mut self, domain: &str) {
        if self.state != GuardState::Fetching {
            self.advance(GuardState::Fetching);
        }
        debug!("snapshot {}: fetching {domain}", self.dir.display());
    }
}

/// Runs the snapshot-check workflow for `domains` inside `dir`.
///
/// Each domain is fetched and written to `dir/<domain>` as a single-domain
/// [`SnapshotDocument`]. Domains are processed in order; a failure stops the
/// run and files already written are left in place.
///
/// # Errors
///
/// - `SnapshotError::InvalidDomain` if a domain is not a plain file name
///   (checked before anything else)
/// - `SnapshotError::DirtyTree` if `dir` has uncommitted changes up front; no
///   DNS query is made
/// - `SnapshotError::Fetch` / `Write` / `Serialize` while snapshotting
/// - `SnapshotError::DriftDetected` if the written files changed the tree
/// - `SnapshotError::StatusCommand` if the status check itself fails
pub async fn snapshot_check<S, T>(
    source: &S,
    status: &T,
    dir: &Path,
    domains: &[String],
) -> Result<SnapshotReport, SnapshotError>
where
    S: RecordSource,
    T: TreeStatus,
{
    for domain in domains {
        validate_file_name(domain)?;
    }

    let mut guard = Guard::new(dir);

    if status.state(dir)? == TreeState::Dirty {
        return Err(SnapshotError::DirtyTree {
            dir: dir.to_path_buf(),
        });
    }
    guard.advance(GuardState::CleanVerified);

    let mut files = Vec::with_capacity(domains.len());
    for domain in domains {
        guard.fetching(domain);
        let contents = snapshot_domain(source, domain).await?;
        let path = dir.join(domain);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;
        info!("Wrote DNS snapshot for {domain} to {}", path.display());
        files.push(path);
    }
    guard.advance(GuardState::Written);

    if status.state(dir)? == TreeState::Dirty {
        return Err(SnapshotError::DriftDetected {
            dir: dir.to_path_buf(),
            domains: domains.to_vec(),
        });
    }
    guard.advance(GuardState::FinalCleanVerified);

    info!(
        "No DNS drift in {} ({} domain(s))",
        dir.display(),
        domains.len()
    );
    Ok(SnapshotReport {
        dir: dir.to_path_buf(),
        files,
    })
}

/// Fetches one domain and returns its serialized single-domain document.
pub async fn snapshot_domain<S: RecordSource>(
    source: &S,
    domain: &str,
) -> Result<String, SnapshotError> {
    let result = fetch_domain(source, domain).await?;
    let mut document = SnapshotDocument::new();
    document.insert(domain, &result);
    Ok(document.to_pretty_json()?)
}

/// Domains become file names inside the snapshot directory; reject anything
/// that would land elsewhere.
fn validate_file_name(domain: &str) -> Result<(), SnapshotError> {
    let invalid = domain.is_empty()
        || domain == "."
        || domain == ".."
        || domain.contains(['/', '\\', '\0']);
    if invalid {
        return Err(SnapshotError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("example.com").is_ok());
        assert!(validate_file_name("sub.example.co.uk").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("a\\b").is_err());
    }

    #[test]
    fn test_guard_starts_idle() {
        let guard = Guard::new(Path::new("/tmp"));
        assert_eq!(guard.state, GuardState::Idle);
    }

    #[test]
    fn test_guard_fetching_entered_once_per_run() {
        let mut guard = Guard::new(Path::new("/tmp"));
        guard.advance(GuardState::CleanVerified);

        guard.fetching("example.com");
        assert_eq!(guard.state, GuardState::Fetching);
        guard.fetching("example.org");
        assert_eq!(guard.state, GuardState::Fetching);

        guard.advance(GuardState::Written);
        assert_eq!(guard.state, GuardState::Written);
    }
}
