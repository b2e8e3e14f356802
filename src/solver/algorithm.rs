//! Candidate generation algorithms
//!
//! Defines the Algorithm trait, the closed set of algorithm variants, and the
//! per-request context they read from.

use super::{BestAverageAngle, NearestNeighborSum, SolverError};
use crate::core::Guess;
use crate::embeddings::Embeddings;

/// Everything a candidate generator needs for one solve
#[derive(Debug, Clone, Copy)]
pub struct CandidateContext<'a> {
    pub words_to_hit: &'a [String],
    pub words_to_avoid: &'a [String],
    pub embeddings: &'a Embeddings,
    /// Candidate clue words, in evaluation order
    pub vocabulary: &'a [String],
    /// Desired number of clues
    pub n: usize,
    /// Cosine-similarity cutoff
    pub threshold: f64,
}

impl<'a> CandidateContext<'a> {
    /// Hit words that have an embedding, with their vectors
    ///
    /// Words without a vector are dropped from linking.
    #[must_use]
    pub fn hit_vectors(&self) -> Vec<(&'a str, &'a [f32])> {
        self.words_to_hit
            .iter()
            .filter_map(|word| Some((word.as_str(), self.embeddings.get(word)?)))
            .collect()
    }

    /// Vocabulary words that may be offered as clues, with their vectors
    ///
    /// Skips tokens that are not a single alphabetic word, words without a vector,
    /// and any word that overlaps a board word (hit or avoid): equal to it, part of
    /// it, or containing it.
    #[must_use]
    pub fn candidates(&self) -> Vec<(&'a str, &'a [f32])> {
        let board: Vec<&str> = self
            .words_to_hit
            .iter()
            .chain(self.words_to_avoid)
            .map(String::as_str)
            .filter(|word| !word.is_empty())
            .collect();

        self.vocabulary
            .iter()
            .map(String::as_str)
            .filter(|word| is_single_word(word) && !overlaps_any(word, &board))
            .filter_map(|word| Some((word, self.embeddings.get(word)?)))
            .collect()
    }
}

fn overlaps_any(word: &str, board: &[&str]) -> bool {
    board
        .iter()
        .any(|&on_board| on_board.contains(word) || word.contains(on_board))
}

/// A clue must be one alphabetic word
fn is_single_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// A strategy for proposing candidate clues
pub trait Algorithm {
    /// Propose raw, unfiltered and unsorted guesses
    ///
    /// Returns an empty vector when no candidate is relevant to any hit word.
    fn generate(&self, context: &CandidateContext<'_>) -> Vec<Guess>;
}

/// Enum wrapper for all algorithm types
///
/// Allows runtime selection of algorithm while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlgorithmType {
    /// Mean similarity over every relevant hit word (default)
    NearestNeighborSum(NearestNeighborSum),
    /// Tightest cluster of hit words around the clue
    BestAverageAngle(BestAverageAngle),
}

impl Algorithm for AlgorithmType {
    fn generate(&self, context: &CandidateContext<'_>) -> Vec<Guess> {
        match self {
            Self::NearestNeighborSum(a) => a.generate(context),
            Self::BestAverageAngle(a) => a.generate(context),
        }
    }
}

impl Default for AlgorithmType {
    fn default() -> Self {
        Self::NearestNeighborSum(NearestNeighborSum::default())
    }
}

impl AlgorithmType {
    /// Create algorithm from name string
    ///
    /// Supported names: "nearest-neighbor-sum" (or "nns"), "best-average-angle" (or "baa").
    ///
    /// # Errors
    /// Returns `SolverError::UnknownAlgorithm` for any other name.
    pub fn from_name(name: &str) -> Result<Self, SolverError> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "nearest-neighbor-sum" | "nearestneighborsum" | "nns" => {
                Ok(Self::NearestNeighborSum(NearestNeighborSum::default()))
            }
            "best-average-angle" | "bestaverageangle" | "baa" => {
                Ok(Self::BestAverageAngle(BestAverageAngle::default()))
            }
            _ => Err(SolverError::UnknownAlgorithm(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NearestNeighborSum(_) => "nearest-neighbor-sum",
            Self::BestAverageAngle(_) => "best-average-angle",
        }
    }
}
