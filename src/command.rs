//! The `oa-diff` command: read two inputs, diff them, render, write.
//!
//! Flow:
//! 1. Read both files, enforcing the configured size cap
//! 2. Diff as text, or canonicalize as JSON first (`--json`)
//! 3. Render a unified diff or a JSON report (`--format`)
//! 4. Write to `--output` atomically, or to stdout

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{DiffCommandConfig, InputMode, OutputFormat};
use crate::diff::unified::unified_diff;
use crate::diff::{DiffRow, DiffStats, LineDiff, compute_diff};
use crate::error::{DiffError, DiffResult};
use crate::json::diff_json;

/// JSON report shape for `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport<'a> {
    pub left_label: String,
    pub right_label: String,
    pub rows: &'a [DiffRow],
    pub stats: ReportStats,
}

/// [`DiffStats`] plus the derived `hasChanges` flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    #[serde(flatten)]
    pub counts: DiffStats,
    pub has_changes: bool,
}

/// Run one diff as described by `config`.
///
/// Differences are not an error; the caller decides what to do with them.
///
/// # Errors
///
/// Returns an error if an input can't be read, is too large, is invalid JSON
/// in JSON mode, or the output can't be written.
pub fn run(config: &DiffCommandConfig) -> Result<LineDiff> {
    info!(
        left = %config.left.display(),
        right = %config.right.display(),
        mode = ?config.mode,
        format = ?config.format,
        "oa-diff starting"
    );

    let left = read_input(&config.left, config.max_input_bytes)?;
    let right = read_input(&config.right, config.max_input_bytes)?;

    let diff = match config.mode {
        InputMode::Text => compute_diff(&left, &right),
        InputMode::Json => diff_json(&left, &right)?,
    };

    let rendered = render(config, &diff)?;

    match &config.output {
        Some(path) => {
            crate::util::atomic::atomic_write(path, &rendered)?;
            debug!(path = %path.display(), bytes = rendered.len(), "wrote diff");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }

    info!(
        additions = diff.stats.additions,
        deletions = diff.stats.deletions,
        modifications = diff.stats.modifications,
        "oa-diff finished"
    );
    Ok(diff)
}

/// Render `diff` in the configured output format.
pub fn render(config: &DiffCommandConfig, diff: &LineDiff) -> DiffResult<String> {
    let left_label = config.left_label();
    let right_label = config.right_label();

    match config.format {
        OutputFormat::Unified => Ok(unified_diff(&left_label, &right_label, &diff.rows)),
        OutputFormat::Json => {
            let report = DiffReport {
                left_label,
                right_label,
                rows: &diff.rows,
                stats: ReportStats {
                    counts: diff.stats,
                    has_changes: diff.has_changes(),
                },
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Read a UTF-8 input file, rejecting anything over `limit` bytes.
fn read_input(path: &Path, limit: u64) -> DiffResult<String> {
    let io_err = |source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > limit {
        return Err(DiffError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    // The file may have grown since the metadata check.
    let file = File::open(path).map_err(io_err)?;
    read_capped(path, file, limit)
}

/// Read at most `limit` bytes from `reader` as UTF-8.
///
/// Anything beyond `limit` is counted, not buffered, and reported as
/// [`DiffError::InputTooLarge`].
fn read_capped(path: &Path, mut reader: impl Read, limit: u64) -> DiffResult<String> {
    let io_err = |source| DiffError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    (&mut reader)
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(io_err)?;

    let read = buf.len() as u64;
    if read > limit {
        let rest = std::io::copy(&mut reader, &mut std::io::sink()).map_err(io_err)?;
        return Err(DiffError::InputTooLarge {
            path: path.to_path_buf(),
            size: read + rest,
            limit,
        });
    }

    String::from_utf8(buf)
        .map_err(|e| io_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_inputs(dir: &Path, left: &str, right: &str) -> (PathBuf, PathBuf) {
        let l = dir.join("left.txt");
        let r = dir.join("right.txt");
        std::fs::write(&l, left).expect("should write left");
        std::fs::write(&r, right).expect("should write right");
        (l, r)
    }

    #[test]
    fn test_unified_output_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (left, right) = write_inputs(dir.path(), "foo\nbar", "foo\nbaz");
        let output = dir.path().join("out.diff");
        let config = DiffCommandConfig {
            left,
            right,
            output: Some(output.clone()),
            left_label: Some("a".to_owned()),
            right_label: Some("b".to_owned()),
            ..DiffCommandConfig::default()
        };

        let diff = run(&config).expect("should run");
        assert_eq!(diff.stats.modifications, 1);

        let written = std::fs::read_to_string(&output).expect("should read output");
        assert_eq!(written, "--- a\n+++ b\n foo\n-bar\n+baz\n");
    }

    #[test]
    fn test_json_report() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (left, right) = write_inputs(dir.path(), "a\nb\nc", "a\nx\nc");
        let config = DiffCommandConfig {
            left,
            right,
            format: OutputFormat::Json,
            ..DiffCommandConfig::default()
        };

        let diff = compute_diff("a\nb\nc", "a\nx\nc");
        let rendered = render(&config, &diff).expect("should render");
        let report: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

        assert_eq!(report["stats"]["additions"], 1);
        assert_eq!(report["stats"]["deletions"], 1);
        assert_eq!(report["stats"]["hasChanges"], true);
        assert_eq!(report["rows"][1]["type"], "deleted");
        assert_eq!(report["rows"][1]["leftContent"], "b");
        assert!(report["rows"][1]["rightContent"].is_null());
    }

    #[test]
    fn test_size_cap_enforced() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (left, right) = write_inputs(dir.path(), "0123456789", "x");
        let err = read_input(&left, 4).expect_err("left exceeds cap");
        assert!(matches!(err, DiffError::InputTooLarge { size: 10, limit: 4, .. }));
        assert!(read_input(&right, 4).is_ok());
    }

    #[test]
    fn test_capped_read_rejects_oversized_stream() {
        let path = Path::new("grown.txt");
        let err = read_capped(path, std::io::Cursor::new(b"0123456789".to_vec()), 4)
            .expect_err("stream exceeds cap");
        assert!(matches!(err, DiffError::InputTooLarge { size: 10, limit: 4, .. }));

        let text = read_capped(path, std::io::Cursor::new(b"abcd".to_vec()), 4)
            .expect("exactly at cap is allowed");
        assert_eq!(text, "abcd");
    }

    #[test]
    fn test_capped_read_rejects_invalid_utf8() {
        let err = read_capped(Path::new("bin"), std::io::Cursor::new(vec![0xff, 0xfe]), 16)
            .expect_err("not UTF-8");
        assert!(matches!(err, DiffError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_input_fails() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (left, right) = write_inputs(dir.path(), "{\"a\": 1}", "{oops");
        let config = DiffCommandConfig {
            left,
            right,
            mode: InputMode::Json,
            output: Some(dir.path().join("never.diff")),
            ..DiffCommandConfig::default()
        };

        let err = run(&config).expect_err("right side is not JSON");
        assert!(err.to_string().contains("invalid JSON on right side"));
        assert!(!dir.path().join("never.diff").exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let err = read_input(Path::new("/nonexistent/oa-diff/input.txt"), 1024)
            .expect_err("file does not exist");
        assert!(matches!(err, DiffError::Io { .. }));
    }
}
