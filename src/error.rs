// ============================================================
// Pipeline Errors
// ============================================================
// Typed failures for the preprocessing operations.
// The library functions return PrepError; the application
// and CLI layers wrap it into anyhow with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    /// An index in the word→index mapping falls outside [0, len)
    #[error("index {index} for word '{word}' is outside the dense range [0, {len})")]
    NonDenseIndex { word: String, index: usize, len: usize },

    /// Two words share the same index, so some row would stay empty
    #[error("index {index} is assigned to both '{first}' and '{second}'")]
    DuplicateIndex { index: usize, first: String, second: String },

    #[error("no embedding vector for word '{0}'")]
    MissingVector(String),

    #[error("vector for '{word}' has dimension {found}, expected {expected}")]
    DimensionMismatch { word: String, expected: usize, found: usize },

    /// Bodies and headlines must be parallel collections
    #[error("{bodies} bodies but {headlines} headlines")]
    LengthMismatch { bodies: usize, headlines: usize },

    #[error("invalid window parameters: {0}")]
    InvalidWindow(String),

    #[error("target index {index} is outside vocabulary of size {vocab_size}")]
    IndexOutOfVocab { index: usize, vocab_size: usize },

    #[error("word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("empty embedding vector for word '{0}'")]
    EmptyVector(String),

    /// Malformed word-vector file content
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
