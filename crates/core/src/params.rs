//! Typed query parameters
//!
//! The host engine hands scoring scripts an untyped parameter map. This
//! module is the typed boundary: `VectorScoreParams` names the three
//! recognized options and `from_json` converts the raw map once, before
//! any shard work begins. Validation beyond shape (non-empty field and
//! vector) happens in [`crate::query::QueryVector::build`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters accepted from the calling query
///
/// Recognized options:
/// - `field` (required): indexed/stored field holding per-document vector data
/// - `vector` (required): the query vector
/// - `cosine` (optional, default false): mean-centered cosine similarity
///   instead of dot product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorScoreParams {
    /// Name of the field holding per-document vector data
    pub field: String,

    /// The query-supplied feature vector
    pub vector: Vec<f64>,

    /// Score with mean-centered cosine similarity (true) or dot product (false)
    #[serde(default)]
    pub cosine: bool,
}

impl VectorScoreParams {
    /// Create parameters for dot-product scoring
    pub fn new(field: impl Into<String>, vector: Vec<f64>) -> Self {
        VectorScoreParams {
            field: field.into(),
            vector,
            cosine: false,
        }
    }

    /// Builder: enable cosine similarity
    pub fn with_cosine(mut self, cosine: bool) -> Self {
        self.cosine = cosine;
        self
    }

    /// Parse from the host's untyped parameter map
    ///
    /// Unknown keys are ignored, matching the tolerant reading a host
    /// gives script parameters. Missing required keys surface as
    /// configuration errors.
    pub fn from_json(params: serde_json::Value) -> Result<Self> {
        serde_json::from_value(params).map_err(|e| Error::InvalidParam {
            name: "params",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_new_defaults_to_dot_product() {
        let params = VectorScoreParams::new("features", vec![1.0, 2.0]);
        assert_eq!(params.field, "features");
        assert_eq!(params.vector, vec![1.0, 2.0]);
        assert!(!params.cosine);
    }

    #[test]
    fn test_params_with_cosine() {
        let params = VectorScoreParams::new("features", vec![1.0]).with_cosine(true);
        assert!(params.cosine);
    }

    #[test]
    fn test_from_json_full() {
        let params = VectorScoreParams::from_json(json!({
            "field": "features",
            "vector": [1.0, 2.0, 3.0],
            "cosine": true,
        }))
        .unwrap();

        assert_eq!(params.field, "features");
        assert_eq!(params.vector, vec![1.0, 2.0, 3.0]);
        assert!(params.cosine);
    }

    #[test]
    fn test_from_json_cosine_defaults_false() {
        let params = VectorScoreParams::from_json(json!({
            "field": "features",
            "vector": [0.5],
        }))
        .unwrap();

        assert!(!params.cosine);
    }

    #[test]
    fn test_from_json_missing_field() {
        let result = VectorScoreParams::from_json(json!({
            "vector": [1.0],
        }));

        let err = result.unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_from_json_missing_vector() {
        let result = VectorScoreParams::from_json(json!({
            "field": "features",
        }));

        assert!(result.unwrap_err().is_config());
    }

    #[test]
    fn test_from_json_integer_components_accepted() {
        // Hosts serialize whole-valued components as integers
        let params = VectorScoreParams::from_json(json!({
            "field": "features",
            "vector": [1, 2, 3],
        }))
        .unwrap();

        assert_eq!(params.vector, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = VectorScoreParams::new("features", vec![1.5, -0.5]).with_cosine(true);
        let encoded = serde_json::to_value(&params).unwrap();
        let decoded: VectorScoreParams = serde_json::from_value(encoded).unwrap();
        assert_eq!(params, decoded);
    }
}
