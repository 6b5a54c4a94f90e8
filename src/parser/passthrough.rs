use super::{InputSource, ParseOutcome, ParserError, ParserToJson};
use std::io::{self, BufRead, Write};

/// Title reported by the passthrough parser regardless of its state
pub const PASSTHROUGH_TITLE: &str = "Unparsed JSON";

/// Placeholder parser that echoes its input unchanged
///
/// No grammar is applied: `parse` always succeeds and `print_json` copies
/// the bound source to the sink byte for byte. Text sources are not
/// decoded, so malformed UTF-8 is echoed rather than rejected.
#[derive(Debug, Default)]
pub struct PassthroughParser {
    source: Option<InputSource>,
}

impl PassthroughParser {
    pub fn new(source: InputSource) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn from_bytes(reader: impl io::Read + 'static) -> Self {
        Self::new(InputSource::bytes(reader))
    }

    pub fn from_text(reader: impl BufRead + 'static) -> Self {
        Self::new(InputSource::text(reader))
    }

    /// Whether a source is still bound (false once printed)
    pub fn has_input(&self) -> bool {
        self.source.is_some()
    }
}

impl ParserToJson for PassthroughParser {
    fn parse(&mut self) -> Result<ParseOutcome, ParserError> {
        Ok(ParseOutcome::Parsed)
    }

    fn print_json(&mut self, out: &mut dyn Write) -> Result<(), ParserError> {
        let copied = match self.source.take() {
            Some(InputSource::Bytes(mut reader)) => io::copy(&mut reader, out)?,
            Some(InputSource::Text(mut reader)) => io::copy(&mut reader, out)?,
            None => {
                return Err(ParserError::InvalidState(
                    "no input available to passthrough parser".to_string(),
                ));
            }
        };
        tracing::trace!(bytes = copied, "passthrough copy complete");
        Ok(())
    }

    fn title(&self) -> &str {
        PASSTHROUGH_TITLE
    }
}
