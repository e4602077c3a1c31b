//! Roster handle
//!
//! Owns the in-memory record store together with the backing-file
//! path, so every operation works against one explicit handle instead
//! of an ambient file path. Mutations write back to the file before
//! returning, keeping the file and the store in sync at every point a
//! caller can observe.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::backing;
use crate::error::{RosterError, RosterResult};
use crate::storage::record::StudentRecord;
use crate::storage::store::RecordStore;

/// In-memory record store bound to its backing file
#[derive(Debug)]
pub struct Roster {
    store: RecordStore,
    path: PathBuf,
}

impl Roster {
    /// Open a roster backed by the given file.
    ///
    /// A missing backing file is not an error: the roster starts empty
    /// and the file is created on the first add. A malformed file is an
    /// error, and no partially-loaded records are kept.
    pub fn open(path: impl Into<PathBuf>) -> RosterResult<Self> {
        let path = path.into();
        let store = match backing::load(&path) {
            Ok(records) => RecordStore::from_records(records),
            Err(RosterError::FileMissing { path: p }) => {
                warn!(path = %p, "backing file missing, starting with empty roster");
                RecordStore::new()
            }
            Err(err) => return Err(err),
        };
        debug!(count = store.len(), path = %path.display(), "roster opened");
        Ok(Roster { store, path })
    }

    /// Append a record to the backing file and then to the store.
    ///
    /// The file write goes first: if it fails the store is untouched
    /// and stays in sync with the file.
    pub fn add(&mut self, record: StudentRecord) -> RosterResult<()> {
        backing::append_record(&self.path, &record)?;
        self.store.append(record);
        Ok(())
    }

    /// Remove the first record with the given exact name, then rewrite
    /// the backing file from the post-removal store state.
    pub fn remove(&mut self, name: &str) -> RosterResult<StudentRecord> {
        let removed = self.store.remove_by_name(name)?;
        backing::rewrite(&self.path, self.store.records())?;
        Ok(removed)
    }

    /// First record with the given enrollment number, if any
    pub fn find(&self, enrollment: u32) -> Option<&StudentRecord> {
        self.store.find_by_enrollment(enrollment)
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[StudentRecord] {
        self.store.records()
    }

    /// In-order traversal; each call starts from the head again
    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.store.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop every in-memory record. The backing file is untouched; the
    /// roster can be rebuilt from it on the next open. Idempotent.
    pub fn release_all(&mut self) {
        self.store.release_all();
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
