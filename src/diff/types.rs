//! Row, classification and statistics types produced by [`compute_diff`].
//!
//! Everything here is built fresh per call and never mutated afterwards.
//!
//! [`compute_diff`]: super::compute_diff

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Classification of a single diff row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineType {
    Unchanged,
    Added,
    Deleted,
    Modified,
}

/// One row of a side-by-side diff.
///
/// Line numbers are 1-based. Changed ranges are half-open `char` indices into
/// the matching content and are only populated on [`DiffLineType::Modified`]
/// rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRow {
    pub left_line_number: Option<usize>,
    pub right_line_number: Option<usize>,
    pub left_content: Option<String>,
    pub right_content: Option<String>,
    #[serde(rename = "type")]
    pub line_type: DiffLineType,
    #[serde(default)]
    pub left_changed_ranges: Vec<Range<usize>>,
    #[serde(default)]
    pub right_changed_ranges: Vec<Range<usize>>,
}

impl DiffRow {
    /// A line present, and identical, on both sides.
    pub fn unchanged(left_line: usize, right_line: usize, content: &str) -> Self {
        Self {
            left_line_number: Some(left_line),
            right_line_number: Some(right_line),
            left_content: Some(content.to_owned()),
            right_content: Some(content.to_owned()),
            line_type: DiffLineType::Unchanged,
            left_changed_ranges: Vec::new(),
            right_changed_ranges: Vec::new(),
        }
    }

    /// A line that only exists on the right.
    pub fn added(right_line: usize, content: &str) -> Self {
        Self {
            left_line_number: None,
            right_line_number: Some(right_line),
            left_content: None,
            right_content: Some(content.to_owned()),
            line_type: DiffLineType::Added,
            left_changed_ranges: Vec::new(),
            right_changed_ranges: Vec::new(),
        }
    }

    /// A line that only exists on the left.
    pub fn deleted(left_line: usize, content: &str) -> Self {
        Self {
            left_line_number: Some(left_line),
            right_line_number: None,
            left_content: Some(content.to_owned()),
            right_content: None,
            line_type: DiffLineType::Deleted,
            left_changed_ranges: Vec::new(),
            right_changed_ranges: Vec::new(),
        }
    }

    /// A paired left/right line with character-level highlight ranges.
    pub fn modified(
        left_line: usize,
        right_line: usize,
        left: &str,
        right: &str,
        left_changed_ranges: Vec<Range<usize>>,
        right_changed_ranges: Vec<Range<usize>>,
    ) -> Self {
        Self {
            left_line_number: Some(left_line),
            right_line_number: Some(right_line),
            left_content: Some(left.to_owned()),
            right_content: Some(right.to_owned()),
            line_type: DiffLineType::Modified,
            left_changed_ranges,
            right_changed_ranges,
        }
    }
}

/// Per-classification row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub unchanged: usize,
}

impl DiffStats {
    /// Tally rows in a single pass.
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        rows.iter().fold(Self::default(), |mut stats, row| {
            match row.line_type {
                DiffLineType::Added => stats.additions += 1,
                DiffLineType::Deleted => stats.deletions += 1,
                DiffLineType::Modified => stats.modifications += 1,
                DiffLineType::Unchanged => stats.unchanged += 1,
            }
            stats
        })
    }

    /// True iff any row is added, deleted or modified.
    pub const fn has_changes(&self) -> bool {
        self.additions + self.deletions + self.modifications > 0
    }
}

/// Result of one diff invocation: ordered rows plus their stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    pub rows: Vec<DiffRow>,
    pub stats: DiffStats,
}

impl LineDiff {
    /// True iff any row is added, deleted or modified.
    pub const fn has_changes(&self) -> bool {
        self.stats.has_changes()
    }
}
