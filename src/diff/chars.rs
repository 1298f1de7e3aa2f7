//! Character-level highlight ranges for modified rows.

use std::ops::Range;

use super::matcher::edit_script;

/// Changed `char` ranges on each side of a modified line pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharRanges {
    pub left: Vec<Range<usize>>,
    pub right: Vec<Range<usize>>,
}

/// Diff `left` against `right` character by character.
///
/// Removed positions become `left` ranges, inserted positions `right` ranges,
/// each merged into maximal contiguous runs.
pub fn char_ranges(left: &str, right: &str) -> CharRanges {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    let script = edit_script(&left_chars, &right_chars);

    CharRanges {
        left: merge_positions(script.removed.iter().copied()),
        right: merge_positions(script.inserted.iter().copied()),
    }
}

/// Collapse ascending indices into half-open runs: `[1, 2, 5]` -> `[1..3, 5..6]`.
fn merge_positions(positions: impl IntoIterator<Item = usize>) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for pos in positions {
        match ranges.last_mut() {
            Some(last) if last.end == pos => last.end += 1,
            _ => ranges.push(pos..pos + 1),
        }
    }
    ranges
}
