//! Ordered in-memory record store
//!
//! The store is a plain ordered sequence: append at the tail, linear
//! scans for lookup and removal. Insertion order is preserved and is
//! the order records are listed and persisted in.

use crate::error::{RosterError, RosterResult};
use crate::storage::record::StudentRecord;

/// Ordered collection of student records
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        RecordStore { records: Vec::new() }
    }

    /// Build a store from an already-ordered sequence (used by load)
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        RecordStore { records }
    }

    /// Append a record at the tail. No uniqueness check on the
    /// enrollment number.
    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// First record with the given enrollment number, scanning from
    /// the head.
    pub fn find_by_enrollment(&self, enrollment: u32) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.enrollment == enrollment)
    }

    /// Remove the first record whose name matches exactly.
    ///
    /// Returns the removed record so the caller can report it. Fails
    /// with `EmptyStore` when there is nothing to remove and
    /// `NameNotFound` when no record matches.
    pub fn remove_by_name(&mut self, name: &str) -> RosterResult<StudentRecord> {
        if self.records.is_empty() {
            return Err(RosterError::EmptyStore);
        }
        match self.records.iter().position(|r| r.name == name) {
            Some(idx) => Ok(self.records.remove(idx)),
            None => Err(RosterError::NameNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// In-order traversal from the head. Each call starts a fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    /// Drop every record. Safe to call repeatedly.
    pub fn release_all(&mut self) {
        self.records.clear();
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as a slice, in insertion order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_record_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.append(StudentRecord::new("Ana", 20, 1).unwrap());
        store.append(StudentRecord::new("Bruno", 21, 2).unwrap());
        store
    }

    #[test]
    fn test_append_preserves_order() {
        let store = two_record_store();
        let names: Vec<&str> = store.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bruno"]);
    }

    #[test]
    fn test_find_by_enrollment() {
        let store = two_record_store();
        let rec = store.find_by_enrollment(2).unwrap();
        assert_eq!(rec.name, "Bruno");
        assert!(store.find_by_enrollment(99).is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut store = two_record_store();
        store.append(StudentRecord::new("Carla", 22, 2).unwrap());
        // Duplicate enrollment numbers are allowed; first wins
        assert_eq!(store.find_by_enrollment(2).unwrap().name, "Bruno");
    }

    #[test]
    fn test_remove_by_name() {
        let mut store = two_record_store();
        let removed = store.remove_by_name("Bruno").unwrap();
        assert_eq!(removed.name, "Bruno");
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "Ana");
    }

    #[test]
    fn test_remove_requires_exact_match() {
        let mut store = two_record_store();
        assert!(matches!(
            store.remove_by_name("Bru"),
            Err(RosterError::NameNotFound { .. })
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.remove_by_name("X"),
            Err(RosterError::EmptyStore)
        ));
    }

    #[test]
    fn test_empty_store_guards() {
        let store = RecordStore::new();
        assert!(store.find_by_enrollment(1).is_none());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn test_release_all_idempotent() {
        let mut store = two_record_store();
        store.release_all();
        assert!(store.is_empty());
        store.release_all();
        assert!(store.is_empty());
    }
}
