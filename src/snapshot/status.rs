//! Working tree status checks.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error_handling::SnapshotError;

/// Whether a working tree has uncommitted changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    /// Tracked files match `HEAD`
    Clean,
    /// At least one tracked file differs from `HEAD`
    Dirty,
}

/// Reports the state of the working tree that holds snapshot files.
pub trait TreeStatus {
    /// Checks `dir` for uncommitted changes.
    fn state(&self, dir: &Path) -> Result<TreeState, SnapshotError>;
}

/// [`TreeStatus`] backed by the `git` command line.
///
/// Runs `git update-index -q --refresh` and then
/// `git diff-index --quiet HEAD --` inside the directory. Only the exit code
/// is consumed: 0 is clean, 1 is dirty. Untracked files are not considered.
#[derive(Debug, Clone)]
pub struct GitTreeStatus {
    program: OsString,
}

impl GitTreeStatus {
    /// Uses `git` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Uses a specific git executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitTreeStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStatus for GitTreeStatus {
    fn state(&self, dir: &Path) -> Result<TreeState, SnapshotError> {
        // Rewriting a file with identical content only changes its stat data;
        // refresh the index so diff-index compares content.
        let refresh = Command::new(&self.program)
            .args(["update-index", "-q", "--refresh"])
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if let Err(e) = refresh {
            log::debug!("git update-index failed in {}: {e}", dir.display());
        }

        let status = Command::new(&self.program)
            .args(["diff-index", "--quiet", "HEAD", "--"])
            .current_dir(dir)
            .status()
            .map_err(|e| SnapshotError::StatusCommand {
                dir: dir.to_path_buf(),
                reason: format!("failed to run git: {e}"),
            })?;

        match status.code() {
            Some(0) => Ok(TreeState::Clean),
            Some(1) => Ok(TreeState::Dirty),
            _ => Err(SnapshotError::StatusCommand {
                dir: dir.to_path_buf(),
                reason: format!("git diff-index exited with {status}"),
            }),
        }
    }
}
