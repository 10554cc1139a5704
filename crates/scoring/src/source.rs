//! Document vector extraction
//!
//! This module provides:
//! - DocAccess: the per-document view of index/field data the host exposes
//! - VectorSource: pluggable extraction strategy interface
//! - PayloadSource: per-term payload lookup in the inverted index
//! - DelimitedSource: parse of a delimited stored string field
//!
//! All strategies produce a [`DocumentVector`] for exactly one document.
//! A document with no data for the field yields an empty vector, never an
//! error; only unparseable content is an error, and the scoring adapter
//! recovers it locally.

use crate::encoding;
use vecrank_core::{DocumentVector, QueryVector, Result};

// ============================================================================
// DocAccess
// ============================================================================

/// Per-document view of already-resident index and field data
///
/// This is the boundary to the host storage engine: implementations wrap
/// whatever per-document lookup structures the host maintains. All methods
/// are synchronous reads of resident data; no I/O happens behind this trait.
pub trait DocAccess {
    /// Payload value attached to the first occurrence of `term` in `field`
    ///
    /// Returns `None` when the term is absent from the document or carries
    /// no payload. Absence is data-level, not an error.
    fn term_payload(&self, field: &str, term: &str) -> Option<f32>;

    /// Raw stored string value of `field` for this document
    ///
    /// Returns `None` when the document has no stored value for the field.
    fn stored_field(&self, field: &str) -> Option<String>;
}

// ============================================================================
// VectorSource
// ============================================================================

/// Pluggable document-vector extraction interface
///
/// Sources take a per-document view and the query model and produce the
/// document's sparse vector. Selecting a source is configuration; the
/// scoring math is shared across all of them.
///
/// # Thread Safety
///
/// Sources must be Send + Sync: one adapter instance may be driven from
/// the thread executing each shard's query.
pub trait VectorSource: Send + Sync {
    /// Extract the vector for one document
    ///
    /// Missing data yields an empty or partial [`DocumentVector`];
    /// malformed data yields a data-format error.
    fn extract(&self, doc: &dyn DocAccess, query: &QueryVector) -> Result<DocumentVector>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// PayloadSource
// ============================================================================

/// Indexed payload lookup
///
/// For each active index `i` of the query, looks up the term `"i"` in the
/// field's inverted-index structure and reads the single float payload on
/// its first occurrence. Whether that enumeration is dense or restricted
/// to positive query components is the query's index policy, not a
/// property of this source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadSource;

impl PayloadSource {
    /// Create a new PayloadSource
    pub fn new() -> Self {
        PayloadSource
    }
}

impl VectorSource for PayloadSource {
    fn extract(&self, doc: &dyn DocAccess, query: &QueryVector) -> Result<DocumentVector> {
        let active = query.active_indices();
        let mut vector = DocumentVector::with_capacity(active.len());

        for &i in active {
            let term = i.to_string();
            if let Some(payload) = doc.term_payload(query.field(), &term) {
                vector.insert(i, f64::from(payload));
            }
        }

        Ok(vector)
    }

    fn name(&self) -> &str {
        "payloads"
    }
}

// ============================================================================
// DelimitedSource
// ============================================================================

/// Delimited stored-field parse
///
/// Reads the document's stored field as one string of whitespace-separated
/// `<index><sep><value>` tokens and produces a vector over whatever indices
/// appear in it. No active-index restriction is applied at parse time; the
/// scorer intersects with the query's active set.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedSource {
    separator: char,
}

impl Default for DelimitedSource {
    fn default() -> Self {
        DelimitedSource {
            separator: encoding::DEFAULT_SEPARATOR,
        }
    }
}

impl DelimitedSource {
    /// Create a new DelimitedSource with the default `'|'` separator
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the index/value separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl VectorSource for DelimitedSource {
    fn extract(&self, doc: &dyn DocAccess, query: &QueryVector) -> Result<DocumentVector> {
        // Absent or blank field is a normal no-data condition
        let text = match doc.stored_field(query.field()) {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Ok(DocumentVector::new()),
        };

        let entries = encoding::parse_entries(query.field(), &text, self.separator)?;
        Ok(entries.into_iter().collect())
    }

    fn name(&self) -> &str {
        "delimited_field"
    }
}
