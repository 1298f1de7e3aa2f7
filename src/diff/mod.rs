//! Side-by-side line diff engine with character-level highlights.
//!
//! [`compute_diff`] is a pure function from two text blobs to an ordered row
//! list plus statistics. It holds no state between calls, performs no I/O and
//! cannot fail, so it can be called concurrently from any number of threads.
//!
//! # Pipeline
//!
//! ```text
//! text ─→ lines::split_lines ─→ matcher::edit_script ─→ pairing::resolve_rows ─→ DiffStats
//!                                                           │
//!                                   chars::char_ranges ←────┘ (Modified rows only)
//! ```
//!
//! Cost is O(N·D) for the line script plus O(n·m) per modified row. Bounding
//! input size is left to the caller.

pub mod chars;
pub mod levenshtein;
pub mod lines;
pub mod matcher;
pub mod pairing;
pub mod types;
pub mod unified;

use tracing::debug;

pub use types::{DiffLineType, DiffRow, DiffStats, LineDiff};

/// Diff `left` against `right`.
///
/// Two empty inputs produce no rows at all. When exactly one input is empty it
/// contributes no lines, so the other side comes out as all `Added` or all
/// `Deleted`.
pub fn compute_diff(left: &str, right: &str) -> LineDiff {
    if left.is_empty() && right.is_empty() {
        debug!("both inputs empty, nothing to diff");
        return LineDiff::default();
    }

    let left_lines = if left.is_empty() {
        Vec::new()
    } else {
        lines::split_lines(left)
    };
    let right_lines = if right.is_empty() {
        Vec::new()
    } else {
        lines::split_lines(right)
    };

    let script = matcher::edit_script(&left_lines, &right_lines);
    let rows = pairing::resolve_rows(&left_lines, &right_lines, &script);
    let stats = DiffStats::from_rows(&rows);

    debug!(
        left_lines = left_lines.len(),
        right_lines = right_lines.len(),
        edits = script.len(),
        rows = rows.len(),
        additions = stats.additions,
        deletions = stats.deletions,
        modifications = stats.modifications,
        "diff computed"
    );

    LineDiff { rows, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty_yields_no_rows() {
        let diff = compute_diff("", "");
        assert!(diff.rows.is_empty());
        assert_eq!(diff.stats, DiffStats::default());
        assert!(!diff.has_changes());
    }

    #[test]
    fn test_empty_left_is_all_added() {
        let diff = compute_diff("", "hello");
        assert_eq!(diff.rows, vec![DiffRow::added(1, "hello")]);
        assert_eq!(diff.stats.additions, 1);
        assert_eq!(diff.stats.deletions, 0);
    }

    #[test]
    fn test_empty_right_is_all_deleted() {
        let diff = compute_diff("a\nb", "");
        assert_eq!(
            diff.rows,
            vec![DiffRow::deleted(1, "a"), DiffRow::deleted(2, "b")]
        );
    }

    #[test]
    fn test_trailing_newline_is_a_line() {
        let diff = compute_diff("a", "a\n");
        assert_eq!(diff.stats.unchanged, 1);
        assert_eq!(diff.stats.additions, 1);
        assert_eq!(diff.rows[1], DiffRow::added(2, ""));
    }

    #[test]
    fn test_line_endings_are_not_content() {
        let diff = compute_diff("a\r\nb\r\n", "a\nb\n");
        assert!(!diff.has_changes());
        assert_eq!(diff.stats.unchanged, 3);
    }
}
