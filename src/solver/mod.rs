//! Codenames clue solving
//!
//! Candidate generation algorithms, the scoring pipeline, and the solver that runs
//! one after the other.

pub mod algorithm;
mod best_average;
mod engine;
mod error;
mod nearest_neighbor;
pub mod scorer;

pub use algorithm::{Algorithm, AlgorithmType, CandidateContext};
pub use best_average::BestAverageAngle;
pub use engine::{Solver, SolverBuilder};
pub use error::SolverError;
pub use nearest_neighbor::NearestNeighborSum;
pub use scorer::{AVOID_THRESHOLD_MULTIPLIER, ScoreMetric, Scorer, top_n_guesses};
