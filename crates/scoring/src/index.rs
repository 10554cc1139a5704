//! In-memory payload index
//!
//! This module provides:
//! - MemoryIndex: a concurrent document store holding per-term payloads
//!   and stored string fields
//! - DocView: the per-document [`DocAccess`] view over one entry
//!
//! The real storage engine behind [`DocAccess`] lives in the host; this
//! index is the reference implementation used by integration tests and
//! benchmarks, written against the same contracts (first-occurrence
//! payload wins, absent field means no data).
//!
//! # Thread Safety
//!
//! Uses DashMap for concurrent access. Multiple writers and readers are
//! supported; one document's entry is updated atomically.

use crate::source::DocAccess;
use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use rustc_hash::FxHashMap;

// ============================================================================
// DocEntry
// ============================================================================

/// Indexed data for one document
#[derive(Debug, Clone, Default)]
struct DocEntry {
    /// field -> term -> payload on the term's first occurrence
    payloads: FxHashMap<String, FxHashMap<String, f32>>,
    /// field -> raw stored string
    stored: FxHashMap<String, String>,
}

// ============================================================================
// MemoryIndex
// ============================================================================

/// Concurrent in-memory index of per-document vector data
///
/// Documents are keyed by a caller-chosen string id. Both persisted vector
/// representations are supported: per-term float payloads written by
/// [`MemoryIndex::index_vector`], and delimited stored strings written by
/// [`MemoryIndex::store_field`].
#[derive(Debug, Default)]
pub struct MemoryIndex {
    docs: DashMap<String, DocEntry>,
}

impl MemoryIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        MemoryIndex {
            docs: DashMap::new(),
        }
    }

    /// Index a dense vector as per-term payloads
    ///
    /// Position `i` becomes term `"i"` carrying the component as its
    /// payload. Re-indexing the same field keeps the first payload per
    /// term, matching the payload reader contract (first occurrence wins).
    pub fn index_vector(&self, doc_id: &str, field: &str, values: &[f64]) {
        let mut entry = self.docs.entry(doc_id.to_string()).or_default();
        let terms = entry.payloads.entry(field.to_string()).or_default();
        for (i, v) in values.iter().enumerate() {
            terms.entry(i.to_string()).or_insert(*v as f32);
        }
    }

    /// Store a raw string field for a document
    ///
    /// Overwrites any previous value, like a stored field on reindex.
    pub fn store_field(&self, doc_id: &str, field: &str, text: &str) {
        let mut entry = self.docs.entry(doc_id.to_string()).or_default();
        entry.stored.insert(field.to_string(), text.to_string());
    }

    /// Per-document view, if the document exists
    pub fn doc(&self, doc_id: &str) -> Option<DocView<'_>> {
        self.docs.get(doc_id).map(|entry| DocView { entry })
    }

    /// All document ids, sorted for deterministic iteration
    pub fn doc_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.docs.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Remove a document, returning whether it was present
    pub fn remove_document(&self, doc_id: &str) -> bool {
        self.docs.remove(doc_id).is_some()
    }

    /// Number of indexed documents
    pub fn total_docs(&self) -> usize {
        self.docs.len()
    }

    /// Check if no document is indexed
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

// ============================================================================
// DocView
// ============================================================================

/// Read view over one document's entry
///
/// Holds a map guard; keep it only for the duration of one scoring call.
pub struct DocView<'a> {
    entry: Ref<'a, String, DocEntry>,
}

impl DocAccess for DocView<'_> {
    fn term_payload(&self, field: &str, term: &str) -> Option<f32> {
        self.entry.value().payloads.get(field)?.get(term).copied()
    }

    fn stored_field(&self, field: &str) -> Option<String> {
        self.entry.value().stored.get(field).cloned()
    }
}
