//! Per-query vector model
//!
//! This module provides:
//! - ScoringMode: dot product vs mean-centered cosine
//! - IndexPolicy: which vector positions participate in scoring
//! - QueryVector: the immutable per-query model, built exactly once
//!
//! All per-query preprocessing (validation, active-index selection, mean
//! and norm computation) happens in [`QueryVector::build`]. Nothing here
//! runs per document.

use crate::error::{Error, Result};
use crate::params::VectorScoreParams;

// ============================================================================
// ScoringMode
// ============================================================================

/// Similarity measure used to score a document against the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Raw dot product over the active indices.
    /// Range: unbounded, higher = more similar.
    /// Assumes vectors are pre-normalized for meaningful comparison.
    #[default]
    DotProduct,

    /// Mean-centered cosine similarity: each vector has its own mean
    /// subtracted from every component before the cosine is computed.
    /// Range: [-1, 1], higher = more similar. Undefined (scored 0.0)
    /// for flat vectors whose centered norm is zero.
    Cosine,
}

impl ScoringMode {
    /// Human-readable name for display and logging
    pub fn name(&self) -> &'static str {
        match self {
            ScoringMode::DotProduct => "dot_product",
            ScoringMode::Cosine => "cosine",
        }
    }

    /// Select the mode from the request's `cosine` flag
    pub fn from_cosine_flag(cosine: bool) -> Self {
        if cosine {
            ScoringMode::Cosine
        } else {
            ScoringMode::DotProduct
        }
    }
}

// ============================================================================
// IndexPolicy
// ============================================================================

/// Which positions of the query vector are active during scoring
///
/// This is an explicit engine-side configuration choice, fixed for the
/// query's lifetime. The two policies have different semantics, not just
/// different cost: under `SparsePositive` a document value at an inactive
/// index is invisible to scoring even if nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Every position 0..len participates, including zero-valued ones
    #[default]
    Dense,

    /// Only positions with a strictly positive query component participate.
    /// Zero and negative query weights are skipped entirely, reducing
    /// per-document lookup cost proportional to query sparsity.
    SparsePositive,
}

impl IndexPolicy {
    /// Human-readable name for display and logging
    pub fn name(&self) -> &'static str {
        match self {
            IndexPolicy::Dense => "dense",
            IndexPolicy::SparsePositive => "sparse_positive",
        }
    }

    /// Select the active positions of `values` under this policy
    pub fn active_indices(&self, values: &[f64]) -> Vec<usize> {
        match self {
            IndexPolicy::Dense => (0..values.len()).collect(),
            IndexPolicy::SparsePositive => values
                .iter()
                .enumerate()
                .filter(|(_, v)| **v > 0.0)
                .map(|(i, _)| i)
                .collect(),
        }
    }
}

// ============================================================================
// QueryVector
// ============================================================================

/// Immutable per-query vector model
///
/// Built once from request parameters, then shared read-only across every
/// document scored in that query. Holds the raw query vector, the active
/// index set, and the precomputed mean and norm so that no per-query work
/// is ever repeated per document.
///
/// `norm` is the sum of squares over the active set: mean-centered values
/// in cosine mode, raw values in dot-product mode. `norm == 0` marks a
/// degenerate query vector (every document scores 0.0).
#[derive(Debug, Clone)]
pub struct QueryVector {
    field: String,
    values: Vec<f64>,
    active: Vec<usize>,
    mode: ScoringMode,
    policy: IndexPolicy,
    mean: f64,
    norm: f64,
}

impl QueryVector {
    /// Build the query vector model, performing all per-query preprocessing
    ///
    /// Fails with a configuration error when `field` or `vector` is empty,
    /// or when the index policy leaves no active positions.
    pub fn build(params: VectorScoreParams, policy: IndexPolicy) -> Result<Self> {
        if params.field.is_empty() {
            return Err(Error::MissingParam { name: "field" });
        }
        if params.vector.is_empty() {
            return Err(Error::MissingParam { name: "vector" });
        }

        let active = policy.active_indices(&params.vector);
        if active.is_empty() {
            return Err(Error::InvalidParam {
                name: "vector",
                reason: format!(
                    "no active indices under {} policy (no strictly positive component)",
                    policy.name()
                ),
            });
        }

        let mode = ScoringMode::from_cosine_flag(params.cosine);
        let values = params.vector;

        let (mean, norm) = match mode {
            ScoringMode::Cosine => {
                let mean: f64 =
                    active.iter().map(|&i| values[i]).sum::<f64>() / active.len() as f64;
                let norm: f64 = active.iter().map(|&i| (values[i] - mean).powi(2)).sum();
                (mean, norm)
            }
            ScoringMode::DotProduct => {
                let norm: f64 = active.iter().map(|&i| values[i] * values[i]).sum();
                (0.0, norm)
            }
        };

        Ok(QueryVector {
            field: params.field,
            values,
            active,
            mode,
            policy,
            mean,
            norm,
        })
    }

    /// Name of the field holding per-document vector data
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The raw query vector; index position is the semantic key
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Positions considered when scoring, in ascending order
    pub fn active_indices(&self) -> &[usize] {
        &self.active
    }

    /// Similarity measure selected for this query
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Index policy the active set was selected under
    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Mean of the active query components (0.0 in dot-product mode)
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Precomputed sum of squares over the active set
    ///
    /// Mean-centered in cosine mode, raw in dot-product mode.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Whether the query vector is degenerate (zero norm)
    ///
    /// A degenerate query scores every document 0.0. The guard is an exact
    /// comparison, not a tolerance check.
    pub fn is_degenerate(&self) -> bool {
        self.norm == 0.0
    }
}
