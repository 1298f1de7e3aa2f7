//! Turns a line-level edit script into classified rows.
//!
//! Both sequences are walked in lock-step. A step where the left line is
//! removed and the right line is inserted is a pairing candidate: it becomes
//! one `Modified` row if the lines are similar enough, otherwise only the
//! left line is emitted as `Deleted` and the right line is reconsidered on the
//! next step.

use tracing::trace;

use super::chars::char_ranges;
use super::levenshtein::similarity;
use super::matcher::EditScript;
use super::types::DiffRow;

/// Minimum similarity for a removed/inserted pair to render as one row.
pub const MODIFIED_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Build the ordered row list for `left` vs `right` from their edit script.
pub fn resolve_rows(left: &[&str], right: &[&str], script: &EditScript) -> Vec<DiffRow> {
    let mut rows = Vec::with_capacity(left.len().max(right.len()));
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        let removed = script.is_removed(i);
        let inserted = script.is_inserted(j);

        match (removed, inserted) {
            (true, true) => {
                let score = similarity(left[i], right[j]);
                if score >= MODIFIED_SIMILARITY_THRESHOLD {
                    trace!(left_line = i + 1, right_line = j + 1, score, "paired as modified");
                    let ranges = char_ranges(left[i], right[j]);
                    rows.push(DiffRow::modified(
                        i + 1,
                        j + 1,
                        left[i],
                        right[j],
                        ranges.left,
                        ranges.right,
                    ));
                    i += 1;
                    j += 1;
                } else {
                    rows.push(DiffRow::deleted(i + 1, left[i]));
                    i += 1;
                }
            }
            (true, false) => {
                rows.push(DiffRow::deleted(i + 1, left[i]));
                i += 1;
            }
            (false, true) => {
                rows.push(DiffRow::added(j + 1, right[j]));
                j += 1;
            }
            (false, false) => {
                rows.push(DiffRow::unchanged(i + 1, j + 1, left[i]));
                i += 1;
                j += 1;
            }
        }
    }

    rows.extend((i..left.len()).map(|k| DiffRow::deleted(k + 1, left[k])));
    rows.extend((j..right.len()).map(|k| DiffRow::added(k + 1, right[k])));

    rows
}
