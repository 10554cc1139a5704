//! Scoring adapter binding the engine to the host's per-document contract
//!
//! This module provides:
//! - DocScorer: the host engine's per-document scoring interface
//! - VectorScorer: the adapter wiring query model, source, and similarity
//!
//! One adapter instance serves one query on one shard. Construction does
//! all per-query work and is the only place a hard failure can surface;
//! per-document invocations always return a numeric score.

use crate::similarity;
use crate::source::{DocAccess, PayloadSource, VectorSource};
use std::sync::Arc;
use vecrank_core::{IndexPolicy, QueryVector, Result, VectorScoreParams};

// ============================================================================
// DocScorer Trait
// ============================================================================

/// Per-document scoring contract consumed by the host engine
///
/// The host constructs one scorer per query per shard, then invokes
/// [`DocScorer::score`] once for every candidate document on the thread
/// executing that shard's query.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync: shards and queries execute concurrently
/// on independent threads with independent scorer instances.
pub trait DocScorer: Send + Sync {
    /// Score one candidate document
    ///
    /// Never fails: missing or malformed per-document data scores 0.0 so
    /// one bad document cannot abort the search request.
    fn score(&self, doc: &dyn DocAccess) -> f32;

    /// Whether this scorer needs the document's base relevance score
    ///
    /// The host's score-combination logic consults this before running
    /// any document through the scorer.
    fn needs_scores(&self) -> bool {
        false
    }

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// VectorScorer
// ============================================================================

/// Vector similarity scoring adapter
///
/// Built once per query: validates parameters, fixes the index policy,
/// and precomputes the query model. Shared read-only across every
/// document scored by this instance; never shared across queries.
pub struct VectorScorer {
    query: QueryVector,
    source: Arc<dyn VectorSource>,
}

impl VectorScorer {
    /// Build an adapter with the dense index policy and payload lookup
    ///
    /// Fails with a configuration error when `field` or `vector` is
    /// missing or empty; the host surfaces that as a query-setup failure
    /// before any shard work begins.
    pub fn from_params(params: VectorScoreParams) -> Result<Self> {
        Self::new(params, IndexPolicy::default())
    }

    /// Build an adapter with an explicit index policy
    pub fn new(params: VectorScoreParams, policy: IndexPolicy) -> Result<Self> {
        let query = QueryVector::build(params, policy)?;

        tracing::debug!(
            field = query.field(),
            mode = query.mode().name(),
            policy = query.policy().name(),
            active = query.active_indices().len(),
            degenerate = query.is_degenerate(),
            "built vector scorer"
        );

        Ok(VectorScorer {
            query,
            source: Arc::new(PayloadSource::new()),
        })
    }

    /// Builder: replace the extraction strategy
    pub fn with_source(mut self, source: Arc<dyn VectorSource>) -> Self {
        self.source = source;
        self
    }

    /// The immutable per-query model this adapter scores against
    pub fn query(&self) -> &QueryVector {
        &self.query
    }
}

impl std::fmt::Debug for VectorScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorScorer")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl DocScorer for VectorScorer {
    fn score(&self, doc: &dyn DocAccess) -> f32 {
        match self.source.extract(doc, &self.query) {
            Ok(vector) => similarity::score(&self.query, &vector),
            Err(err) => {
                // Per-document anomalies are absorbed, not propagated
                tracing::warn!(
                    field = self.query.field(),
                    source = self.source.name(),
                    error = %err,
                    "scoring document as 0.0 after data-format error"
                );
                0.0
            }
        }
    }

    fn name(&self) -> &str {
        "payload_vector_score"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DelimitedSource;
    use rustc_hash::FxHashMap;

    #[derive(Default)]
    struct FakeDoc {
        payloads: FxHashMap<(String, String), f32>,
        stored: FxHashMap<String, String>,
    }

    impl DocAccess for FakeDoc {
        fn term_payload(&self, field: &str, term: &str) -> Option<f32> {
            self.payloads
                .get(&(field.to_string(), term.to_string()))
                .copied()
        }

        fn stored_field(&self, field: &str) -> Option<String> {
            self.stored.get(field).cloned()
        }
    }

    fn payload_doc(field: &str, values: &[f32]) -> FakeDoc {
        let mut doc = FakeDoc::default();
        for (i, v) in values.iter().enumerate() {
            doc.payloads.insert((field.to_string(), i.to_string()), *v);
        }
        doc
    }

    #[test]
    fn test_from_params_rejects_missing_field() {
        let err = VectorScorer::from_params(VectorScoreParams::new("", vec![1.0])).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_from_params_rejects_empty_vector() {
        let err =
            VectorScorer::from_params(VectorScoreParams::new("features", vec![])).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_scores_payload_document() {
        let scorer =
            VectorScorer::from_params(VectorScoreParams::new("features", vec![1.0, 2.0, 3.0]))
                .unwrap();
        let doc = payload_doc("features", &[2.0, 4.0, 6.0]);

        let s = scorer.score(&doc);
        assert!((s - 28.0).abs() < 1e-6);
    }

    #[test]
    fn test_scores_missing_document_data_as_zero() {
        let scorer =
            VectorScorer::from_params(VectorScoreParams::new("features", vec![1.0, 2.0]))
                .unwrap();
        let doc = FakeDoc::default();

        assert_eq!(scorer.score(&doc), 0.0);
    }

    #[test]
    fn test_recovers_malformed_delimited_field_as_zero() {
        let scorer =
            VectorScorer::from_params(VectorScoreParams::new("features", vec![1.0, 2.0]))
                .unwrap()
                .with_source(Arc::new(DelimitedSource::new()));

        let mut doc = FakeDoc::default();
        doc.stored.insert("features".into(), "abc".into());

        // Malformed content must come back as a score, not an error
        assert_eq!(scorer.score(&doc), 0.0);
    }

    #[test]
    fn test_needs_scores_is_false() {
        let scorer =
            VectorScorer::from_params(VectorScoreParams::new("features", vec![1.0])).unwrap();
        assert!(!scorer.needs_scores());
    }

    #[test]
    fn test_scorer_name() {
        let scorer =
            VectorScorer::from_params(VectorScoreParams::new("features", vec![1.0])).unwrap();
        assert_eq!(scorer.name(), "payload_vector_score");
    }

    #[test]
    fn test_query_accessor_exposes_model() {
        let scorer = VectorScorer::new(
            VectorScoreParams::new("features", vec![3.0, -1.0, 0.0]),
            IndexPolicy::SparsePositive,
        )
        .unwrap();

        assert_eq!(scorer.query().active_indices(), &[0]);
    }

    #[test]
    fn test_scorer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VectorScorer>();
    }
}
