//! `oa-diff` — line and character level diff engine for OpenAcosmi.
//!
//! Compares two text blobs (or two JSON documents after canonicalization)
//! and produces side-by-side rows: unchanged, added, deleted, or modified
//! with character-level highlight ranges, plus summary statistics.
//!
//! # Modules
//!
//! - `diff` — the pure engine ([`compute_diff`]) and unified-diff export
//! - `json` — JSON canonicalization and [`diff_json`]
//! - `session` — discarding results superseded by newer requests
//! - `config` / `command` — the `oa-diff` binary's argument parsing and run loop
//!
//! # Architecture
//!
//! ```text
//! files → command::run ─→ json::canonicalize (--json) ─→ diff::compute_diff ─→ render
//!                                                                              ↓
//! stdout / --output (atomic) ←─────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod config;
pub mod diff;
pub mod error;
pub mod json;
pub mod session;
pub mod util;

pub use command::run;
pub use diff::{DiffLineType, DiffRow, DiffStats, LineDiff, compute_diff};
pub use error::{DiffError, DiffResult, Side};
pub use json::diff_json;
