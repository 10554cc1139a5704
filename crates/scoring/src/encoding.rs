//! Delimited vector field encoding
//!
//! One of the two persisted vector representations is a single stored
//! string of whitespace-separated `<index><sep><value>` tokens, e.g.
//! `"0|1.5 1|2.0 2|-0.5"`. This module parses and formats that encoding.

use vecrank_core::{Error, Result};

/// Default separator between index and value within a token
pub const DEFAULT_SEPARATOR: char = '|';

/// Parse a stored field's content into `(index, value)` pairs
///
/// Tokens are separated by whitespace; each token is `<index><sep><value>`
/// with `index` a non-negative integer and `value` a float. No restriction
/// to any active-index set is applied here; the scorer intersects.
///
/// `field` is only used for error context.
///
/// # Example
///
/// ```
/// use vecrank_scoring::encoding::{parse_entries, DEFAULT_SEPARATOR};
///
/// let entries = parse_entries("features", "0|1.5 1|2.0", DEFAULT_SEPARATOR).unwrap();
/// assert_eq!(entries, vec![(0, 1.5), (1, 2.0)]);
/// ```
pub fn parse_entries(field: &str, text: &str, separator: char) -> Result<Vec<(usize, f64)>> {
    let mut entries = Vec::new();
    for token in text.split_whitespace() {
        let (index, value) = token.split_once(separator).ok_or_else(|| malformed(
            field,
            format!("token {:?} has no {:?} separator", token, separator),
        ))?;

        let index: usize = index.parse().map_err(|_| {
            malformed(field, format!("invalid index in token {:?}", token))
        })?;
        let value: f64 = value.parse().map_err(|_| {
            malformed(field, format!("invalid float in token {:?}", token))
        })?;

        entries.push((index, value));
    }
    Ok(entries)
}

/// Format a dense vector in the delimited encoding
///
/// Index positions are 0-based and consecutive, matching what
/// [`parse_entries`] reads back.
///
/// # Example
///
/// ```
/// use vecrank_scoring::encoding::{format_entries, DEFAULT_SEPARATOR};
///
/// let text = format_entries(&[1.5, 2.0], DEFAULT_SEPARATOR);
/// assert_eq!(text, "0|1.5 1|2");
/// ```
pub fn format_entries(values: &[f64], separator: char) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}{}{}", i, separator, v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn malformed(field: &str, reason: String) -> Error {
    Error::MalformedField {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let entries = parse_entries("features", "0|1.5 1|2.0 2|-0.5", '|').unwrap();
        assert_eq!(entries, vec![(0, 1.5), (1, 2.0), (2, -0.5)]);
    }

    #[test]
    fn test_parse_empty_text() {
        let entries = parse_entries("features", "", '|').unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_whitespace_only() {
        let entries = parse_entries("features", "   \t\n ", '|').unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_custom_separator() {
        let entries = parse_entries("features", "0:1.0 1:2.0", ':').unwrap();
        assert_eq!(entries, vec![(0, 1.0), (1, 2.0)]);
    }

    #[test]
    fn test_parse_sparse_indices() {
        // Delimited fields may carry any subset of positions
        let entries = parse_entries("features", "3|0.25 7|4.0", '|').unwrap();
        assert_eq!(entries, vec![(3, 0.25), (7, 4.0)]);
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = parse_entries("features", "abc", '|').unwrap_err();
        assert!(err.is_data_format());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_parse_non_numeric_value() {
        let err = parse_entries("features", "0|x", '|').unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_parse_non_numeric_index() {
        let err = parse_entries("features", "a|1.0", '|').unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_parse_negative_index_rejected() {
        let err = parse_entries("features", "-1|1.0", '|').unwrap_err();
        assert!(err.is_data_format());
    }

    #[test]
    fn test_format_then_parse_roundtrip() {
        let values = vec![1.5, 2.0, -0.5];
        let text = format_entries(&values, DEFAULT_SEPARATOR);
        let entries = parse_entries("features", &text, DEFAULT_SEPARATOR).unwrap();
        assert_eq!(entries, vec![(0, 1.5), (1, 2.0), (2, -0.5)]);
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_entries(&[], '|'), "");
    }
}
