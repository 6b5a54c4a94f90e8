use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use transcript_parser::{execute, Cli, ParserRegistry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only parser output and reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let registry = ParserRegistry::new();
    tracing::debug!(
        files = cli.files.len(),
        parsers = registry.parser_count(),
        "starting"
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = execute(&cli, registry, &mut stdout.lock(), &mut stderr.lock())?;

    if let Some(summary) = summary {
        tracing::info!(
            files = summary.file_count(),
            failed = summary.failed_count(),
            "done"
        );
    }

    Ok(())
}
