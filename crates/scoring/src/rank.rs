//! Ranking over an in-memory index
//!
//! Scores every document in a [`MemoryIndex`] with one [`DocScorer`] and
//! produces a deterministic ranked list. This is the candidate-free
//! harness shape used by integration tests and benchmarks; candidate
//! selection and score combination belong to the host pipeline.

use crate::index::MemoryIndex;
use crate::scorer::DocScorer;

// ============================================================================
// ScoredDoc
// ============================================================================

/// One ranked scoring result
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    /// Document id
    pub doc_id: String,
    /// Similarity score (0.0 for degenerate or missing data)
    pub score: f32,
    /// 1-based rank in the result list
    pub rank: u32,
}

// ============================================================================
// rank_all
// ============================================================================

/// Score every indexed document and rank the results
///
/// Sorts by score descending with ties broken by document id ascending,
/// so the ordering is deterministic even when many documents share a
/// score (e.g. all the 0.0 no-data documents).
pub fn rank_all(index: &MemoryIndex, scorer: &dyn DocScorer) -> Vec<ScoredDoc> {
    let mut hits: Vec<(String, f32)> = index
        .doc_ids()
        .into_iter()
        .filter_map(|doc_id| {
            let view = index.doc(&doc_id)?;
            let score = scorer.score(&view);
            Some((doc_id, score))
        })
        .collect();

    hits.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    hits.into_iter()
        .enumerate()
        .map(|(i, (doc_id, score))| ScoredDoc {
            doc_id,
            score,
            rank: (i + 1) as u32,
        })
        .collect()
}
