#![allow(dead_code)]

use anyhow::{Result, anyhow};
use rusty_golf_ledger::model::{LedgerDocument, Round, RoundId, Strokes};
use rusty_golf_ledger::storage::{DocumentStore, MemoryStore, StorageError};
use rusty_golf_ledger::sync::SyncAgent;
use std::cell::Cell;
use std::rc::Rc;

pub const SCENARIO: [(u32, u32); 9] = [
    (4, 5),
    (3, 3),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
];

pub const TIED_ROUND: [(u32, u32); 9] = [
    (3, 4),
    (5, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
    (4, 4),
];

pub fn strokes(pairs: &[(u32, u32)]) -> Vec<Strokes> {
    pairs.iter().copied().map(Strokes::from).collect()
}

/// Stored text holding empty rounds under `ids`.
pub fn document_with_rounds(ids: &[RoundId]) -> String {
    let mut doc = LedgerDocument::default();
    doc.ensure_wins();
    for id in ids {
        doc.rounds.insert(*id, Round::new());
    }
    doc.to_json().expect("serialize fixture document")
}

#[derive(Debug, Default)]
pub struct RecordingSync {
    pub pulls: usize,
    pub pushes: Vec<String>,
    pub fail_pull: bool,
    pub fail_push: bool,
}

impl SyncAgent for RecordingSync {
    fn pull(&mut self) -> Result<()> {
        self.pulls += 1;
        if self.fail_pull {
            return Err(anyhow!("remote unreachable"));
        }
        Ok(())
    }

    fn push(&mut self, description: &str) -> Result<()> {
        self.pushes.push(description.to_string());
        if self.fail_push {
            return Err(anyhow!("remote rejected push"));
        }
        Ok(())
    }
}

/// Memory-backed store whose `fail_on`-th write (1-based) is refused.
/// Clones share the buffer and the write counter.
#[derive(Debug, Clone)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    writes: Rc<Cell<usize>>,
    fail_on: usize,
}

impl FlakyStore {
    pub fn failing_on(fail_on: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            writes: Rc::new(Cell::new(0)),
            fail_on,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn stored(&self) -> LedgerDocument {
        LedgerDocument::from_json(&self.inner.contents().unwrap_or_default())
            .expect("stored document parses")
    }
}

impl DocumentStore for FlakyStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        self.inner.read()
    }

    fn write(&mut self, contents: &str) -> Result<(), StorageError> {
        let attempt = self.writes.get() + 1;
        self.writes.set(attempt);
        if attempt == self.fail_on {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.inner.write(contents)
    }
}
