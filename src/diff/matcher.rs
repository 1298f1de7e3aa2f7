//! Minimal edit scripts over arbitrary sequences.
//!
//! Wraps `similar`'s Myers implementation. With no deadline Myers yields a
//! shortest insert/delete script, and it is deterministic for identical
//! inputs. The same matcher runs over lines (`&str`) and characters (`char`).

use std::collections::BTreeSet;
use std::hash::Hash;

use similar::{Algorithm, DiffTag, capture_diff_slices};

/// Positions removed from the left sequence and inserted into the right one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    pub removed: BTreeSet<usize>,
    pub inserted: BTreeSet<usize>,
}

impl EditScript {
    /// Whether the left element at `left_index` is deleted.
    pub fn is_removed(&self, left_index: usize) -> bool {
        self.removed.contains(&left_index)
    }

    /// Whether the right element at `right_index` is inserted.
    pub fn is_inserted(&self, right_index: usize) -> bool {
        self.inserted.contains(&right_index)
    }

    /// Number of single-unit operations in the script.
    pub fn len(&self) -> usize {
        self.removed.len() + self.inserted.len()
    }

    /// True when both sequences are identical.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty()
    }
}

/// Compute a minimal edit script transforming `left` into `right`.
pub fn edit_script<T: Eq + Hash + Ord>(left: &[T], right: &[T]) -> EditScript {
    let mut script = EditScript::default();

    for op in capture_diff_slices(Algorithm::Myers, left, right) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {}
            DiffTag::Delete => script.removed.extend(old_range),
            DiffTag::Insert => script.inserted.extend(new_range),
            DiffTag::Replace => {
                script.removed.extend(old_range);
                script.inserted.extend(new_range);
            }
        }
    }

    script
}
