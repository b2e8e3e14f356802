//! Core domain types for Codenames clue giving
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess;
pub mod similarity;
mod threshold;

pub use guess::Guess;
pub use similarity::{angular_similarity, cosine_similarity};
pub use threshold::ThresholdStrategy;
