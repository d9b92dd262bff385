// Shared test doubles for the record source and the working tree status.
//
// Every test file that needs them declares `mod helpers;`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use dns_snapshot::{LookupError, RecordKind, RecordSource, RecordValue};
use dns_snapshot::{SnapshotError, TreeState, TreeStatus};

/// Scripted answer for one (domain, record kind) query.
#[allow(dead_code)] // Not every test file uses every variant
#[derive(Clone)]
pub enum Answer {
    Values(Vec<RecordValue>),
    NoData,
    Fail(&'static str),
}

/// Record source that replays scripted answers per domain. Queries that were
/// not scripted answer "no data".
#[derive(Default)]
pub struct ScriptedSource {
    answers: RefCell<HashMap<(String, RecordKind), Answer>>,
    queries: RefCell<Vec<(String, RecordKind)>>,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, domain: &str, kind: RecordKind, answer: Answer) -> Self {
        self.set(domain, kind, answer);
        self
    }

    /// Changes an answer after construction, e.g. to simulate a DNS change.
    pub fn set(&self, domain: &str, kind: RecordKind, answer: Answer) {
        self.answers
            .borrow_mut()
            .insert((domain.to_string(), kind), answer);
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn queried_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = Vec::new();
        for (domain, _) in self.queries.borrow().iter() {
            if domains.last() != Some(domain) {
                domains.push(domain.clone());
            }
        }
        domains
    }
}

impl RecordSource for ScriptedSource {
    async fn lookup(
        &self,
        domain: &str,
        kind: RecordKind,
    ) -> Result<Vec<RecordValue>, LookupError> {
        self.queries.borrow_mut().push((domain.to_string(), kind));
        match self.answers.borrow().get(&(domain.to_string(), kind)) {
            Some(Answer::Values(values)) => Ok(values.clone()),
            Some(Answer::Fail(message)) => Err(LookupError::Failed((*message).into())),
            Some(Answer::NoData) | None => Err(LookupError::NoData),
        }
    }
}

/// Tree status that replays a fixed sequence of states.
pub struct ScriptedStatus {
    states: RefCell<VecDeque<TreeState>>,
    checks: Cell<usize>,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedStatus {
    pub fn new(states: &[TreeState]) -> Self {
        Self {
            states: RefCell::new(states.iter().copied().collect()),
            checks: Cell::new(0),
        }
    }

    pub fn checks(&self) -> usize {
        self.checks.get()
    }
}

impl TreeStatus for ScriptedStatus {
    fn state(&self, dir: &Path) -> Result<TreeState, SnapshotError> {
        self.checks.set(self.checks.get() + 1);
        self.states
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| SnapshotError::StatusCommand {
                dir: dir.to_path_buf(),
                reason: "no scripted state left".to_string(),
            })
    }
}

/// In-memory stand-in for a version-controlled directory: files are compared
/// against the contents recorded by the last `commit`.
#[derive(Default)]
pub struct CommittedFiles {
    committed: RefCell<HashMap<PathBuf, Vec<u8>>>,
    checks: Cell<usize>,
}

#[allow(dead_code)] // Used by other test files
impl CommittedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current content of every file in `dir`.
    pub fn commit(&self, dir: &Path) {
        let mut committed = self.committed.borrow_mut();
        committed.clear();
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            committed.insert(path.clone(), std::fs::read(&path).unwrap());
        }
    }

    pub fn checks(&self) -> usize {
        self.checks.get()
    }
}

impl TreeStatus for CommittedFiles {
    fn state(&self, _dir: &Path) -> Result<TreeState, SnapshotError> {
        self.checks.set(self.checks.get() + 1);
        // Like git diff-index, only tracked (committed) files count
        for (path, content) in self.committed.borrow().iter() {
            let current = std::fs::read(path).ok();
            if current.as_deref() != Some(content.as_slice()) {
                return Ok(TreeState::Dirty);
            }
        }
        Ok(TreeState::Clean)
    }
}

#[allow(dead_code)] // Used by other test files
pub fn text(value: &str) -> RecordValue {
    RecordValue::Text(value.to_string())
}

#[allow(dead_code)] // Used by other test files
pub fn domains(list: &[&str]) -> Vec<String> {
    list.iter().map(|d| d.to_string()).collect()
}
