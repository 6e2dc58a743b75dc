//! Storage seam and the persisted snapshot shape.

use crate::error::StorageResult;
use crate::models::Record;

/// Persisted state of an address book: the insert counter and every record
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Monotonic insert counter
    pub record_id: u64,

    /// Records in insertion order
    pub records: Vec<Record>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            record_id: 1,
            records: Vec::new(),
        }
    }
}

/// Backing store for an address book.
///
/// Provides abstraction over where the book is persisted, enabling
/// different implementations (file on disk, in-memory mock).
pub trait Storage {
    /// Read the persisted state.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> StorageResult<Option<Snapshot>>;

    /// Overwrite the persisted state.
    fn save(&self, snapshot: &Snapshot) -> StorageResult<()>;
}
