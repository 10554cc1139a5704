//! Similarity scoring math
//!
//! Pure functions combining the per-query model with one extracted
//! document vector. All accumulation is in `f64` even though the returned
//! score is `f32`; long vectors would otherwise lose precision to
//! cancellation. Division by a norm only happens behind an exact zero
//! check, never a tolerance check.

use vecrank_core::{DocumentVector, QueryVector, ScoringMode};

/// Score one document vector against the query
///
/// Degenerate inputs score 0.0 rather than failing:
/// - empty document vector (no data for the field)
/// - document vector not covering the query's full active set
/// - zero document norm or zero query norm
pub fn score(query: &QueryVector, doc: &DocumentVector) -> f32 {
    let active = query.active_indices();
    if doc.is_empty() || !doc.covers(active) {
        return 0.0;
    }

    match query.mode() {
        ScoringMode::DotProduct => dot_product_score(query, doc),
        ScoringMode::Cosine => centered_cosine_score(query, doc),
    }
}

/// Raw dot product over the active indices
///
/// Unbounded; scales proportionally with the document values. Vectors are
/// used as-is, with no implicit normalization. A zero-norm document or
/// query still short-circuits to 0.0 so both modes share the same
/// degenerate-vector policy.
fn dot_product_score(query: &QueryVector, doc: &DocumentVector) -> f32 {
    let values = query.values();
    let mut dot = 0.0f64;
    let mut doc_norm = 0.0f64;

    for &i in query.active_indices() {
        let dv = doc.get(i).unwrap_or(0.0);
        dot += dv * values[i];
        doc_norm += dv * dv;
    }

    if doc_norm == 0.0 || query.norm() == 0.0 {
        return 0.0;
    }
    dot as f32
}

/// Mean-centered cosine similarity
///
/// Both vectors have their own mean (over the active set) subtracted
/// before the cosine is computed. The query side is precomputed once per
/// query; only the document side is computed here.
fn centered_cosine_score(query: &QueryVector, doc: &DocumentVector) -> f32 {
    let active = query.active_indices();
    let values = query.values();

    let doc_mean: f64 =
        active.iter().map(|&i| doc.get(i).unwrap_or(0.0)).sum::<f64>() / active.len() as f64;

    let mut dot = 0.0f64;
    let mut doc_norm = 0.0f64;
    for &i in active {
        let dc = doc.get(i).unwrap_or(0.0) - doc_mean;
        let qc = values[i] - query.mean();
        dot += dc * qc;
        doc_norm += dc * dc;
    }

    normalized(dot, doc_norm, query.norm())
}

/// Divide by the norms, guarding exactly-zero norms
fn normalized(dot: f64, doc_norm: f64, query_norm: f64) -> f32 {
    if doc_norm == 0.0 || query_norm == 0.0 {
        0.0
    } else {
        (dot / (doc_norm.sqrt() * query_norm.sqrt())) as f32
    }
}
