//! Board solving command
//!
//! Solves one board and returns the ranked clues along with what was skipped.

use crate::core::Guess;
use crate::embeddings::Embeddings;
use crate::solver::{AlgorithmType, ScoreMetric, SolverBuilder, SolverError};
use std::time::{Duration, Instant};

/// Configuration for solving a board
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub words_to_hit: Vec<String>,
    pub words_to_avoid: Vec<String>,
    pub n: usize,
    pub strategy: String,
    pub algorithm: AlgorithmType,
    pub metric: ScoreMetric,
    pub vocab_limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(words_to_hit: Vec<String>, words_to_avoid: Vec<String>) -> Self {
        Self {
            words_to_hit,
            words_to_avoid,
            n: 5,
            strategy: "moderate".to_string(),
            algorithm: AlgorithmType::default(),
            metric: ScoreMetric::default(),
            vocab_limit: None,
        }
    }
}

/// Result of solving a board
#[derive(Debug)]
pub struct SolveResult {
    pub words_to_hit: Vec<String>,
    pub words_to_avoid: Vec<String>,
    /// Board words with no embedding
    pub missing_words: Vec<String>,
    pub algorithm: &'static str,
    pub strategy: String,
    pub threshold: f64,
    pub guesses: Vec<Guess>,
    pub duration: Duration,
}

/// Solve a board using the given embeddings
///
/// `vocabulary`, when given, replaces the embedding vocabulary (and ignores
/// `vocab_limit`).
///
/// # Errors
///
/// Returns an error if the configuration is invalid: no words to hit, zero clues
/// requested, or an unknown threshold strategy.
pub fn solve_board(
    config: SolveConfig,
    embeddings: &Embeddings,
    vocabulary: Option<&[String]>,
) -> Result<SolveResult, SolverError> {
    let mut builder = SolverBuilder::new(config.words_to_hit, config.words_to_avoid)
        .n(config.n)
        .strategy(config.strategy.clone())
        .metric(config.metric);
    if let Some(limit) = config.vocab_limit {
        builder = builder.vocab_limit(limit);
    }

    let mut solver = builder.build(embeddings)?;
    if let Some(vocabulary) = vocabulary {
        solver = solver.with_vocabulary(vocabulary);
    }

    let start = Instant::now();
    let guesses = solver.solve(&config.algorithm);
    let duration = start.elapsed();

    Ok(SolveResult {
        words_to_hit: solver.words_to_hit().to_vec(),
        words_to_avoid: solver.words_to_avoid().to_vec(),
        missing_words: solver
            .missing_words()
            .into_iter()
            .map(str::to_string)
            .collect(),
        algorithm: config.algorithm.name(),
        strategy: config.strategy,
        threshold: solver.threshold(),
        guesses,
        duration,
    })
}
