//! oa-diff -- side-by-side text/JSON diff with unified or JSON output.
//!
//! Usage: oa-diff [--json] [--format unified|json] [--output <path>] <left> <right>

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the diff on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = oa_diff::config::DiffCommandConfig::from_args(std::env::args().skip(1))?;

    oa_diff::run(&config)?;
    Ok(())
}
