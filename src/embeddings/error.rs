use thiserror::Error;

/// Errors raised while building an embedding store
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("failed to read embeddings: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed. `line` is 1-based.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A vector's length differs from the first vector loaded.
    #[error("line {line}: vector for '{word}' has {found} components, expected {expected}")]
    DimensionMismatch {
        line: usize,
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("no embeddings found in input")]
    Empty,
}
