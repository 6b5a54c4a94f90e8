// Public API exports
pub mod cli;
pub mod driver;
pub mod parser;

// Re-export main types for convenience
pub use parser::{
    InputSource, ParseOutcome, ParserError, ParserFactory, ParserRegistry, ParserToJson,
    PassthroughParser, PASSTHROUGH_TITLE,
};

pub use driver::{Driver, FileReport, FileStatus, RunSummary};

pub use cli::{execute, Cli, USAGE};
