//! Vector similarity scoring engine
//!
//! This crate provides:
//! - VectorSource trait with payload-lookup and delimited-field strategies
//! - Similarity scoring (raw dot product, mean-centered cosine)
//! - VectorScorer adapter implementing the host's per-document contract
//! - MemoryIndex reference store for tests and benchmarks
//! - rank_all harness producing deterministic ranked results
//!
//! # Usage
//!
//! ```
//! use vecrank_core::VectorScoreParams;
//! use vecrank_scoring::{rank_all, MemoryIndex, VectorScorer};
//!
//! let index = MemoryIndex::new();
//! index.index_vector("doc1", "features", &[1.0, 2.0, 3.0]);
//!
//! let params = VectorScoreParams::new("features", vec![1.0, 2.0, 3.0]).with_cosine(true);
//! let scorer = VectorScorer::from_params(params).unwrap();
//!
//! let results = rank_all(&index, &scorer);
//! assert_eq!(results[0].doc_id, "doc1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod index;
pub mod rank;
pub mod scorer;
pub mod similarity;
pub mod source;

// Re-export commonly used types
pub use index::{DocView, MemoryIndex};
pub use rank::{rank_all, ScoredDoc};
pub use scorer::{DocScorer, VectorScorer};
pub use source::{DelimitedSource, DocAccess, PayloadSource, VectorSource};
