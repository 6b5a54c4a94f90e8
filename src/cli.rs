use crate::driver::{Driver, RunSummary};
use crate::parser::ParserRegistry;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Printed when no input files are given
pub const USAGE: &str = "Usage : transcript-parser <inputfile>...";

/// Convert transcript files to JSON on standard output
#[derive(Debug, Parser)]
#[command(name = "transcript-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input files, processed in order
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}

/// Run the driver over the parsed arguments
///
/// Returns `None` when there was nothing to do and only the usage line was
/// printed.
pub fn execute(
    cli: &Cli,
    registry: ParserRegistry,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> std::io::Result<Option<RunSummary>> {
    if cli.files.is_empty() {
        writeln!(out, "{}", USAGE)?;
        out.flush()?;
        return Ok(None);
    }

    let driver = Driver::new(registry);
    Ok(Some(driver.run(&cli.files, out, diag)))
}
