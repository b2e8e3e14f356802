use thiserror::Error;

/// Invalid solver configuration
///
/// Raised before any similarity computation. A missing embedding is never an error;
/// neither is an empty result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("words to hit must not be empty")]
    NoWordsToHit,

    #[error("number of clues must be positive, got {0}")]
    InvalidCount(usize),

    #[error(
        "unknown threshold strategy '{0}': expected risky, moderate, conservative, or a number between -1 and 1"
    )]
    UnknownThreshold(String),

    #[error("threshold must be a finite number between -1 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("unknown algorithm '{0}': expected nearest-neighbor-sum or best-average-angle")]
    UnknownAlgorithm(String),

    #[error("avoid multiplier must be finite and positive, got {0}")]
    InvalidAvoidMultiplier(f64),

    #[error("cannot deal {needed} board words from a list of {available}")]
    BoardTooSmall { needed: usize, available: usize },

    #[error("clue '{0}' has no embedding")]
    UnknownClue(String),
}
