//! JSON comparison on top of the text engine.
//!
//! Both documents are re-serialized with sorted object keys and two-space
//! indentation, then diffed as plain text. Inputs that fail to parse are
//! reported and never reach the engine.

use serde_json::Value;
use tracing::debug;

use crate::diff::{LineDiff, compute_diff};
use crate::error::{DiffError, DiffResult, Side};

/// Re-serialize `text` as canonical pretty-printed JSON.
///
/// Object keys come out sorted because `serde_json::Map` is ordered when the
/// `preserve_order` feature is off.
pub fn canonicalize(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

/// Canonicalize both documents and diff the results.
pub fn diff_json(left: &str, right: &str) -> DiffResult<LineDiff> {
    let left = canonicalize(left).map_err(|source| DiffError::InvalidJson {
        side: Side::Left,
        source,
    })?;
    let right = canonicalize(right).map_err(|source| DiffError::InvalidJson {
        side: Side::Right,
        source,
    })?;
    debug!(left_bytes = left.len(), right_bytes = right.len(), "canonicalized JSON inputs");

    Ok(compute_diff(&left, &right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_keys() {
        let out = canonicalize(r#"{"b":1,"a":[true,null]}"#).expect("should parse");
        assert_eq!(out, "{\n  \"a\": [\n    true,\n    null\n  ],\n  \"b\": 1\n}");
    }

    #[test]
    fn test_key_order_is_not_a_change() {
        let diff = diff_json(r#"{"x":1,"y":2}"#, r#"{ "y": 2, "x": 1 }"#).expect("should diff");
        assert!(!diff.has_changes());
        assert_eq!(diff.stats.unchanged, 4);
    }

    #[test]
    fn test_value_change_is_modified() {
        let diff = diff_json(r#"{"name":"alpha"}"#, r#"{"name":"alpHa"}"#).expect("should diff");
        assert_eq!(diff.stats.modifications, 1);
        assert_eq!(diff.stats.unchanged, 2);
    }

    #[test]
    fn test_invalid_side_reported() {
        let err = diff_json("{}", "{not json").expect_err("right side is invalid");
        assert!(matches!(err, DiffError::InvalidJson { side: Side::Right, .. }));

        let err = diff_json("[1,", "{}").expect_err("left side is invalid");
        assert!(matches!(err, DiffError::InvalidJson { side: Side::Left, .. }));
        assert!(err.to_string().starts_with("invalid JSON on left side"));
    }
}
