//! Command implementations

pub mod analyze;
pub mod random;
pub mod solve;

pub use analyze::{ClueAnalysis, WordSimilarity, analyze_clue};
pub use random::{Board, deal_board};
pub use solve::{SolveConfig, SolveResult, solve_board};
