//! vecrank - payload vector scoring for per-document relevance ranking
//!
//! vecrank scores a candidate document by comparing a query-supplied
//! feature vector against the document's stored vector, read either from
//! per-term payloads in an inverted index or from a delimited stored
//! string field. Two similarity measures are supported: raw dot product
//! and mean-centered cosine.
//!
//! # Quick Start
//!
//! ```
//! use vecrank::{rank_all, MemoryIndex, VectorScoreParams, VectorScorer};
//!
//! let index = MemoryIndex::new();
//! index.index_vector("product-1", "features", &[1.0, 2.0, 3.0]);
//! index.index_vector("product-2", "features", &[3.0, 2.0, 1.0]);
//!
//! let params = VectorScoreParams::new("features", vec![1.0, 2.0, 3.0]).with_cosine(true);
//! let scorer = VectorScorer::from_params(params)?;
//!
//! let results = rank_all(&index, &scorer);
//! assert_eq!(results[0].doc_id, "product-1");
//! # Ok::<(), vecrank::Error>(())
//! ```
//!
//! # Architecture
//!
//! The query model is built exactly once per query ([`QueryVector`]);
//! extraction strategies ([`VectorSource`]) produce one [`DocumentVector`]
//! per candidate; the adapter ([`VectorScorer`]) binds both to the host's
//! per-document contract ([`DocScorer`]) and absorbs per-document data
//! anomalies as 0.0 scores.

// Re-export the public API from the member crates
pub use vecrank_core::{
    DocumentVector, Error, IndexPolicy, QueryVector, Result, ScoringMode, VectorScoreParams,
};
pub use vecrank_scoring::{
    encoding, rank_all, similarity, DelimitedSource, DocAccess, DocScorer, DocView, MemoryIndex,
    PayloadSource, ScoredDoc, VectorScorer, VectorSource,
};
