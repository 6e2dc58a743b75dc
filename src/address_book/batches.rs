//! Fixed-size batching over a snapshot of records.

use crate::models::Record;
use std::iter::FusedIterator;
use std::vec;

/// Iterator over batches of records.
///
/// Owns its records, so it is unaffected by later changes to the book it
/// came from. Every batch holds `batch_size` records except possibly the
/// last one.
#[derive(Debug, Clone)]
pub struct RecordBatches {
    records: vec::IntoIter<Record>,
    batch_size: usize,
}

impl RecordBatches {
    pub(crate) fn new(records: Vec<Record>, batch_size: usize) -> Self {
        Self {
            records: records.into_iter(),
            batch_size: batch_size.max(1),
        }
    }

    /// Maximum number of records per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Iterator for RecordBatches {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<Record> = self.records.by_ref().take(self.batch_size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches = self.records.len().div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for RecordBatches {}

impl FusedIterator for RecordBatches {}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<Record> {
        (0..count).map(|i| Record::new(format!("Contact {}", i))).collect()
    }

    fn sizes(batches: RecordBatches) -> Vec<usize> {
        batches.map(|batch| batch.len()).collect()
    }

    #[test]
    fn test_batches_with_short_tail() {
        assert_eq!(sizes(RecordBatches::new(records(5), 2)), vec![2, 2, 1]);
    }

    #[test]
    fn test_batches_divide_evenly() {
        assert_eq!(sizes(RecordBatches::new(records(6), 3)), vec![3, 3]);
    }

    #[test]
    fn test_batch_larger_than_records() {
        assert_eq!(sizes(RecordBatches::new(records(3), 10)), vec![3]);
    }

    #[test]
    fn test_empty_records_yield_nothing() {
        let mut batches = RecordBatches::new(Vec::new(), 4);
        assert!(batches.next().is_none());
        assert!(batches.next().is_none());
    }

    #[test]
    fn test_zero_batch_size_is_one() {
        let batches = RecordBatches::new(records(3), 0);
        assert_eq!(batches.batch_size(), 1);
        assert_eq!(sizes(batches), vec![1, 1, 1]);
    }

    #[test]
    fn test_len_counts_remaining_batches() {
        let mut batches = RecordBatches::new(records(5), 2);
        assert_eq!(batches.len(), 3);
        batches.next();
        assert_eq!(batches.len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let names: Vec<String> = RecordBatches::new(records(4), 3)
            .flatten()
            .map(|record| record.name().as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Contact 0", "Contact 1", "Contact 2", "Contact 3"]);
    }
}
