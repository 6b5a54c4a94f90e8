//! Per-file loop: open each input, run it through a parser, report the outcome.


use crate::parser::{InputSource, ParseOutcome, ParserError, ParserRegistry};
use std::error::Error as StdError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Terminal state reached by one input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Parsed and printed
    Printed,
    /// Read but not recognised by the parser
    ParseFailed,
    /// Could not be opened
    NotFound,
    /// Read or write failure while parsing or printing
    Io,
    /// Parser was driven without input
    InvalidInput,
    /// Any other parser failure
    Unexpected,
}

/// Outcome for a single command-line argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Reports for every argument, in command-line order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn file_count(&self) -> usize {
        self.reports.len()
    }

    pub fn printed_count(&self) -> usize {
        self.count(FileStatus::Printed)
    }

    pub fn failed_count(&self) -> usize {
        self.file_count() - self.printed_count()
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }
}

/// Sequential driver over a parser registry
pub struct Driver {
    registry: ParserRegistry,
}

impl Driver {
    pub fn new(registry: ParserRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Process every file in order
    ///
    /// User-facing lines go to `out`; diagnostic traces for internal
    /// failures go to `diag`. A failure on one file never stops the run.
    pub fn run<P: AsRef<Path>>(
        &self,
        files: &[P],
        out: &mut dyn Write,
        diag: &mut dyn Write,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        for file in files {
            let path = file.as_ref();
            let status = match self.process(path, out) {
                Ok(ParseOutcome::Parsed) => FileStatus::Printed,
                Ok(ParseOutcome::Rejected) => {
                    info!(path = %path.display(), "input rejected by parser");
                    Self::emit(out, format_args!("Parse failed"));
                    FileStatus::ParseFailed
                }
                Err(err) => Self::report_error(path, &err, out, diag),
            };
            if let Err(e) = out.flush() {
                debug!(error = %e, "failed to flush output");
            }

            summary.reports.push(FileReport {
                path: path.to_path_buf(),
                status,
            });
        }

        debug!(
            files = summary.file_count(),
            printed = summary.printed_count(),
            "run complete"
        );
        summary
    }

    /// Drive one file through the capability contract
    ///
    /// The parser owns the opened file, so the handle is released when this
    /// returns on any path.
    fn process(&self, path: &Path, out: &mut dyn Write) -> Result<ParseOutcome, ParserError> {
        let source = InputSource::open_text(path).map_err(|source| ParserError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened input");

        let mut parser = self.registry.build(path, source);
        let outcome = parser.parse()?;
        if outcome.is_parsed() {
            debug!(path = %path.display(), title = parser.title(), "printing");
            parser.print_json(out)?;
        }
        Ok(outcome)
    }

    fn report_error(
        path: &Path,
        err: &ParserError,
        out: &mut dyn Write,
        diag: &mut dyn Write,
    ) -> FileStatus {
        match err {
            ParserError::NotFound { source, .. } => {
                info!(path = %path.display(), error = %source, "cannot open input");
                Self::emit(out, format_args!("File not found : \"{}\"", path.display()));
                FileStatus::NotFound
            }
            ParserError::Io(e) => {
                info!(path = %path.display(), error = %e, "I/O failure");
                Self::emit(out, format_args!("IO error scanning file \"{}\"", path.display()));
                Self::emit(out, format_args!("{}", e));
                FileStatus::Io
            }
            ParserError::InvalidState(_) => {
                info!(path = %path.display(), error = %err, "parser in invalid state");
                Self::emit(out, format_args!("Invalid input file:"));
                Self::trace(diag, err);
                FileStatus::InvalidInput
            }
            ParserError::Unexpected(_) => {
                info!(path = %path.display(), error = %err, "unexpected parser failure");
                Self::emit(out, format_args!("Unexpected exception:"));
                Self::trace(diag, err);
                FileStatus::Unexpected
            }
        }
    }

    fn emit(out: &mut dyn Write, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(out, "{}", line) {
            debug!(error = %e, "failed to write report line");
        }
    }

    fn trace(diag: &mut dyn Write, err: &ParserError) {
        if let Err(e) = Self::write_trace(diag, err) {
            debug!(error = %e, "failed to write diagnostic trace");
        }
    }

    /// Write the error, its debug form and its source chain
    fn write_trace(diag: &mut dyn Write, err: &ParserError) -> io::Result<()> {
        writeln!(diag, "{}", err)?;
        writeln!(diag, "    {:?}", err)?;
        let mut cause = err.source();
        while let Some(e) = cause {
            writeln!(diag, "Caused by: {}", e)?;
            cause = e.source();
        }
        diag.flush()
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(ParserRegistry::new())
    }
}
