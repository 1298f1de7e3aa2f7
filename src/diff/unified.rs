//! Unified-diff text export.
//!
//! Renders every row (no hunks, no context trimming) under a `---`/`+++`
//! header. `Modified` rows expand to a `-` line followed by a `+` line.

use super::types::{DiffLineType, DiffRow};

/// Render the prefixed output lines for a single row.
pub fn row_lines(row: &DiffRow) -> Vec<String> {
    let left = row.left_content.as_deref().unwrap_or_default();
    let right = row.right_content.as_deref().unwrap_or_default();

    match row.line_type {
        DiffLineType::Deleted => vec![format!("-{left}")],
        DiffLineType::Added => vec![format!("+{right}")],
        DiffLineType::Modified => vec![format!("-{left}"), format!("+{right}")],
        DiffLineType::Unchanged => vec![format!(" {left}")],
    }
}

/// Generate a unified diff of `rows` labelled with `left_label`/`right_label`.
///
/// Every line, including the last, is newline-terminated.
pub fn unified_diff(left_label: &str, right_label: &str, rows: &[DiffRow]) -> String {
    let mut out = format!("--- {left_label}\n+++ {right_label}\n");
    for line in rows.iter().flat_map(row_lines) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
