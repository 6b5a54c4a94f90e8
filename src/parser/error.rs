use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("File not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parser state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
