//! JSON file implementation of [`Storage`].

use crate::error::StorageResult;
use crate::models::Record;
use crate::storage::traits::{Snapshot, Storage};
use serde::de::Error as _;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File storage holding the pair `(record_id, records)` as JSON.
///
/// The file is opened once per load or save and closed before returning.
/// Saving truncates and rewrites the file in place, so a crash mid-write can
/// leave it corrupt.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<Snapshot>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No address book file, starting empty");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let (record_id, records): (u64, Vec<Record>) =
            serde_json::from_reader(BufReader::new(file))?;

        let mut names = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records
            .iter()
            .map(|record| record.name().as_str())
            .find(|name| !names.insert(*name))
        {
            return Err(serde_json::Error::custom(format!(
                "duplicate record name: {}",
                duplicate
            ))
            .into());
        }

        tracing::debug!(
            path = %self.path.display(),
            record_id,
            records = records.len(),
            "Loaded address book"
        );

        Ok(Some(Snapshot { record_id, records }))
    }

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, &(snapshot.record_id, &snapshot.records))?;
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            record_id = snapshot.record_id,
            records = snapshot.records.len(),
            "Saved address book"
        );

        Ok(())
    }
}
