//! Codenames Solver
//!
//! Generates Codenames clues from word embeddings: one word that links as many of the
//! team's words as possible while staying away from everything else on the board.
//!
//! # Quick Start
//!
//! ```rust
//! use codenames_solver::embeddings::Embeddings;
//! use codenames_solver::solver::{AlgorithmType, SolverBuilder};
//!
//! let embeddings = Embeddings::from_pairs([
//!     ("football", vec![1.0, 0.0]),
//!     ("stadium", vec![0.98, -0.14]),
//!     ("poison", vec![0.17, 0.98]),
//!     ("arsenal", vec![0.99, 0.03]),
//! ])
//! .unwrap();
//!
//! let solver = SolverBuilder::new(["football", "stadium"], ["poison"])
//!     .strategy("moderate")
//!     .build(&embeddings)
//!     .unwrap();
//!
//! for guess in solver.solve(&AlgorithmType::default()) {
//!     println!("{guess}");
//! }
//! ```

// Core domain types
pub mod core;

// Word vectors and file formats
pub mod embeddings;

// Clue generation and scoring
pub mod solver;

// Board word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
