//! Atomic output writing via tempfile + rename.
//!
//! The report is written to a [`tempfile::NamedTempFile`] next to the target
//! and then persisted over it, so a reader never sees a half-written diff.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Atomically write `content` to `path`.
///
/// # Errors
///
/// Returns an error if the parent directory doesn't exist, writing fails,
/// or the rename fails (e.g., cross-device).
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temp file in {}", parent.display()))?;

    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .with_context(|| format!("failed to write diff for {}", path.display()))?;

    tmp.persist(path)
        .with_context(|| format!("failed to atomically replace {}", path.display()))?;

    Ok(())
}
