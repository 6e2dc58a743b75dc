//! In-memory address book with file persistence.
//!
//! [`AddressBook`] owns every [`Record`] keyed by name, in insertion order.
//! State is read from a [`Storage`] once at construction and written back
//! only when [`AddressBook::dump`] is called.

mod batches;

pub use batches::RecordBatches;

use crate::error::AddressBookResult;
use crate::matching::RecordMatcher;
use crate::models::Record;
use crate::storage::{JsonFileStorage, Snapshot, Storage};
use std::fmt;
use std::path::PathBuf;

/// The store of all records, keyed by name.
pub struct AddressBook {
    storage: Box<dyn Storage>,
    record_id: u64,
    records: Vec<Record>,
}

impl AddressBook {
    /// Open the book persisted at `path`, starting empty if the file is missing.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> AddressBookResult<Self> {
        Self::with_storage(JsonFileStorage::new(path))
    }

    /// Create a book over an arbitrary storage and load its state.
    pub fn with_storage(storage: impl Storage + 'static) -> AddressBookResult<Self> {
        let initial = Snapshot::default();
        let mut book = Self {
            storage: Box::new(storage),
            record_id: initial.record_id,
            records: initial.records,
        };
        book.load()?;
        Ok(book)
    }

    /// Replace in-memory state with the persisted state.
    ///
    /// When nothing has been persisted the current state is kept.
    pub fn load(&mut self) -> AddressBookResult<()> {
        if let Some(snapshot) = self.storage.load()? {
            self.record_id = snapshot.record_id;
            self.records = snapshot.records;
        }
        tracing::info!(records = self.records.len(), "Address book loaded");
        Ok(())
    }

    /// Write the counter and every record to storage, overwriting it.
    pub fn dump(&self) -> AddressBookResult<()> {
        let snapshot = Snapshot {
            record_id: self.record_id,
            records: self.records.clone(),
        };
        self.storage.save(&snapshot)?;
        tracing::info!(records = self.records.len(), "Address book saved");
        Ok(())
    }

    /// Insert a record, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
        self.record_id += 1;
    }

    /// Records whose name contains `query` (ignoring case) or whose phones
    /// contain `query`.
    ///
    /// A record is listed once for a name match and once more for each
    /// matching phone.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        RecordMatcher::new(query)
            .find_matches(&self.records)
            .into_iter()
            .map(|found| found.record)
            .collect()
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name().as_str() == name)
    }

    /// Look up a record by exact name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    /// Remove a record by exact name. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position_of(name)?;
        tracing::debug!(name, "Deleting record");
        Some(self.records.remove(index))
    }

    /// Batches of at most `batch_size` records over a snapshot taken now.
    ///
    /// A `batch_size` of 0 is treated as 1. Changes to the book after this
    /// call are not seen by the returned iterator.
    pub fn iterator(&self, batch_size: usize) -> RecordBatches {
        RecordBatches::new(self.records.clone(), batch_size)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The insert counter.
    pub fn record_id(&self) -> u64 {
        self.record_id
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressBook")
            .field("record_id", &self.record_id)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
