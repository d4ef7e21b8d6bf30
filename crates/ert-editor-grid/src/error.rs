use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the grid model and its codecs.
#[derive(Debug, Error)]
pub enum GridError {
    /// A value of a type cells cannot hold. Indicates a caller bug.
    #[error("unsupported cell value type: {0}")]
    UnsupportedCellType(&'static str),

    #[error("cell numbers must be finite, got {0}")]
    NonFiniteNumber(f64),

    #[error("no worksheet named `{0}`")]
    UnknownWorksheet(String),

    #[error("invalid cell address `{0}`")]
    InvalidAddress(String),

    #[error("invalid cell range `{0}`")]
    InvalidRange(String),

    /// The file content could not be decoded or encoded.
    #[error("codec error: {0}")]
    Codec(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("no file is open")]
    NoFileOpen,

    #[error("failed to write `{}`", .0.display())]
    WriteFailed(PathBuf),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
