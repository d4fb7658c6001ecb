use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Cannot read source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Source {} is not valid UTF-8: {source}", path.display())]
    SourceEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("Line {line}: malformed range directive: {reason}")]
    MalformedRange { line: usize, reason: String },
    #[error("Font error: {0}")]
    Font(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BingoError>;

/// Summary of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Cards laid out across all pages
    pub cards_generated: usize,
    /// Pages started on the canvas
    pub pages: usize,
}
