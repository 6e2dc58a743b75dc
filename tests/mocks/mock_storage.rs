use address_book::error::{StorageError, StorageResult};
use address_book::storage::{Snapshot, Storage};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock storage for testing.
///
/// Keeps the last saved snapshot in memory, can be told to fail, and tracks
/// method calls for verification. Clones share state, so a test can keep a
/// handle after giving one to an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStorage {
    snapshot: Arc<Mutex<Option<Snapshot>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create a new empty MockStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockStorage that already holds `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let storage = Self::new();
        *storage.snapshot.lock().unwrap() = Some(snapshot);
        storage
    }

    /// The last saved snapshot.
    pub fn saved(&self) -> Option<Snapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Make every following `save` fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Storage for MockStorage {
    fn load(&self) -> StorageResult<Option<Snapshot>> {
        self.track_call("load");
        Ok(self.saved())
    }

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }

        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}
