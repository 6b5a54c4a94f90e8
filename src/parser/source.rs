use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Raw input bound to a parser instance
///
/// Exactly one stream kind is held. The parser owns the stream, so dropping
/// the parser releases any file handle behind it.
pub enum InputSource {
    /// Undecoded byte stream
    Bytes(Box<dyn Read>),
    /// UTF-8 text stream
    Text(Box<dyn BufRead>),
}

impl InputSource {
    pub fn bytes(reader: impl Read + 'static) -> Self {
        InputSource::Bytes(Box::new(reader))
    }

    pub fn text(reader: impl BufRead + 'static) -> Self {
        InputSource::Text(Box::new(reader))
    }

    /// Open a file on disk as a text source
    pub fn open_text(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::text(BufReader::new(file)))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::Bytes(_) => "bytes",
            InputSource::Text(_) => "text",
        }
    }
}

impl std::fmt::Debug for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("InputSource").field(&self.kind()).finish()
    }
}
