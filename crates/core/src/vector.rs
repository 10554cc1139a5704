//! Per-document vector representation
//!
//! A `DocumentVector` is built fresh for one document, consumed by one
//! scoring call, and discarded. An absent index means the storage held no
//! data there, which is distinct from a stored zero.

use rustc_hash::FxHashMap;

/// Sparse per-document vector: index position -> stored value
///
/// Populated only for indices present in the storage. Uses a
/// non-cryptographic hash since keys are small integers and the map lives
/// for a single scoring call.
#[derive(Debug, Clone, Default)]
pub struct DocumentVector {
    values: FxHashMap<usize, f64>,
}

impl DocumentVector {
    /// Create an empty document vector
    pub fn new() -> Self {
        DocumentVector {
            values: FxHashMap::default(),
        }
    }

    /// Create with capacity for `n` entries
    pub fn with_capacity(n: usize) -> Self {
        DocumentVector {
            values: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Set the value at an index position
    ///
    /// Last write wins; extraction strategies only write each index once.
    pub fn insert(&mut self, index: usize, value: f64) {
        self.values.insert(index, value);
    }

    /// Value at an index position, if the storage had data there
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(&index).copied()
    }

    /// Number of populated index positions
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no index position is populated
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every index in `indices` is populated
    ///
    /// Partial coverage of the query's active set is a missing-data
    /// condition, not an error; the scorer turns it into a 0.0 score.
    pub fn covers(&self, indices: &[usize]) -> bool {
        indices.iter().all(|i| self.values.contains_key(i))
    }
}

impl FromIterator<(usize, f64)> for DocumentVector {
    fn from_iter<T: IntoIterator<Item = (usize, f64)>>(iter: T) -> Self {
        DocumentVector {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let doc = DocumentVector::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut doc = DocumentVector::new();
        doc.insert(0, 1.5);
        doc.insert(2, -0.5);

        assert_eq!(doc.get(0), Some(1.5));
        assert_eq!(doc.get(2), Some(-0.5));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_absent_index_is_none_not_zero() {
        let mut doc = DocumentVector::new();
        doc.insert(0, 0.0);

        assert_eq!(doc.get(0), Some(0.0));
        assert_eq!(doc.get(1), None);
    }

    #[test]
    fn test_covers_full_set() {
        let doc: DocumentVector = [(0, 1.0), (1, 2.0), (2, 3.0)].into_iter().collect();
        assert!(doc.covers(&[0, 1, 2]));
        assert!(doc.covers(&[0, 2]));
    }

    #[test]
    fn test_covers_rejects_partial_coverage() {
        let doc: DocumentVector = [(0, 1.0), (2, 3.0)].into_iter().collect();
        assert!(!doc.covers(&[0, 1, 2]));
    }

    #[test]
    fn test_covers_empty_index_set() {
        let doc = DocumentVector::new();
        assert!(doc.covers(&[]));
    }

    #[test]
    fn test_from_iterator() {
        let doc: DocumentVector = [(0, 1.5), (1, 2.0), (2, -0.5)].into_iter().collect();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.get(1), Some(2.0));
    }
}
