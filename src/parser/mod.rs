mod error;
mod outcome;
mod passthrough;
mod registry;
mod source;


pub use error::ParserError;
pub use outcome::ParseOutcome;
pub use passthrough::{PassthroughParser, PASSTHROUGH_TITLE};
pub use registry::{ParserFactory, ParserRegistry};
pub use source::InputSource;

use std::io::Write;

/// Core trait that all parsers must implement
///
/// An instance is built over one input source and used once:
/// `parse`, then `print_json` if the outcome was `Parsed`.
pub trait ParserToJson {
    /// Consume the bound input and decide whether it is recognised
    ///
    /// # Returns
    /// `Rejected` for readable but unrecognised input; I/O failures are errors
    fn parse(&mut self) -> Result<ParseOutcome, ParserError>;

    /// Write the JSON rendering of the parsed input to `out`
    ///
    /// Fails with `ParserError::InvalidState` if no input is bound.
    fn print_json(&mut self, out: &mut dyn Write) -> Result<(), ParserError>;

    /// Human-readable label for the parsed unit
    fn title(&self) -> &str;
}
