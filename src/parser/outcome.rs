/// Result of a successful `parse()` call
///
/// Reading the input and recognising it are separate questions: I/O
/// failures come back as `ParserError`, while input that was read but not
/// understood comes back as `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Input was recognised; `print_json` may be called
    Parsed,
    /// Input was readable but is not valid for this parser
    Rejected,
}

impl ParseOutcome {
    pub fn is_parsed(self) -> bool {
        matches!(self, ParseOutcome::Parsed)
    }
}
