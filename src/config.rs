//! Command-line configuration for the `oa-diff` binary.
//!
//! ```text
//! oa-diff [--json] [--format unified|json] [--output <path>]
//!         [--left-label <s>] [--right-label <s>] [--max-bytes <n>]
//!         <left> <right>
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Default input-size cap per file (8 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 8 * 1024 * 1024;

/// How the two inputs are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Text,
    /// Canonicalize both inputs as JSON before diffing.
    Json,
}

/// How the diff is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Unified,
    /// Rows plus stats as a JSON report.
    Json,
}

/// Configuration for one `oa-diff` run.
#[derive(Debug, Clone)]
pub struct DiffCommandConfig {
    pub left: PathBuf,
    pub right: PathBuf,
    pub mode: InputMode,
    pub format: OutputFormat,
    /// Write here (atomically) instead of stdout.
    pub output: Option<PathBuf>,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub max_input_bytes: u64,
}

impl Default for DiffCommandConfig {
    fn default() -> Self {
        Self {
            left: PathBuf::new(),
            right: PathBuf::new(),
            mode: InputMode::Text,
            format: OutputFormat::Unified,
            output: None,
            left_label: None,
            right_label: None,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl DiffCommandConfig {
    /// Parse arguments (without the program name).
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.mode = InputMode::Json,
                "--format" => {
                    config.format = match value_for(&mut args, &arg)?.as_str() {
                        "unified" => OutputFormat::Unified,
                        "json" => OutputFormat::Json,
                        other => bail!("unknown output format: {other} (expected unified or json)"),
                    };
                }
                "--output" => config.output = Some(PathBuf::from(value_for(&mut args, &arg)?)),
                "--left-label" => config.left_label = Some(value_for(&mut args, &arg)?),
                "--right-label" => config.right_label = Some(value_for(&mut args, &arg)?),
                "--max-bytes" => {
                    let raw = value_for(&mut args, &arg)?;
                    config.max_input_bytes = raw
                        .parse()
                        .with_context(|| format!("invalid --max-bytes value: {raw}"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
                _ => positional.push(arg),
            }
        }

        let [left, right]: [String; 2] = positional
            .try_into()
            .map_err(|rest: Vec<String>| {
                anyhow::anyhow!("expected exactly two input paths, got {}", rest.len())
            })?;
        config.left = PathBuf::from(left);
        config.right = PathBuf::from(right);

        Ok(config)
    }

    /// Header label for the left side, defaulting to its path.
    pub fn left_label(&self) -> String {
        self.left_label
            .clone()
            .unwrap_or_else(|| self.left.display().to_string())
    }

    /// Header label for the right side, defaulting to its path.
    pub fn right_label(&self) -> String {
        self.right_label
            .clone()
            .unwrap_or_else(|| self.right.display().to_string())
    }
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("missing value for {flag}"))
}
