//! Nearest-neighbor-sum candidate generation
//!
//! Links each vocabulary word to every hit word it is individually close to, and
//! scores it by the mean similarity over those links.

use super::algorithm::{Algorithm, CandidateContext};
use crate::core::{Guess, cosine_similarity};
use rayon::prelude::*;

/// Aggregate similarity over every relevant hit word
///
/// A hit word is linked when its cosine similarity to the clue exceeds the relevance
/// threshold. `similarity_score` is the mean similarity over linked words and
/// `secondary_score` is the strongest single link.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NearestNeighborSum {
    /// Per-pair relevance cutoff (default: the solve threshold)
    pub relevance_threshold: Option<f64>,
}

impl NearestNeighborSum {
    /// Create with an explicit per-pair relevance cutoff
    #[must_use]
    pub const fn with_relevance_threshold(relevance_threshold: f64) -> Self {
        Self {
            relevance_threshold: Some(relevance_threshold),
        }
    }
}

impl Algorithm for NearestNeighborSum {
    fn generate(&self, context: &CandidateContext<'_>) -> Vec<Guess> {
        let relevance = self.relevance_threshold.unwrap_or(context.threshold);
        let targets = context.hit_vectors();
        if targets.is_empty() {
            return Vec::new();
        }

        context
            .candidates()
            .par_iter()
            .filter_map(|&(clue, vector)| {
                let mut linked = Vec::new();
                let mut total = 0.0;
                let mut strongest = f64::NEG_INFINITY;

                for &(word, target) in &targets {
                    let similarity = cosine_similarity(vector, target);
                    if similarity > relevance {
                        linked.push(word.to_string());
                        total += similarity;
                        strongest = strongest.max(similarity);
                    }
                }

                if linked.is_empty() {
                    return None;
                }

                let mean = total / linked.len() as f64;
                Some(Guess::new(clue, linked, mean).with_secondary_score(strongest))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::Embeddings;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    fn embeddings() -> Embeddings {
        Embeddings::from_pairs([
            ("football", vec![1.0, 0.0, 0.0]),
            ("stadium", vec![0.8, 0.6, 0.0]),
            ("poison", vec![0.0, 0.0, 1.0]),
            ("arsenal", vec![0.9, 0.3, 0.0]),
            ("venom", vec![0.0, 0.1, 1.0]),
            ("sky", vec![0.0, -1.0, 0.0]),
        ])
        .unwrap()
    }

    fn generate(algorithm: NearestNeighborSum, hit: &[&str], threshold: f64) -> Vec<Guess> {
        let embeddings = embeddings();
        let hit = words(hit);
        let vocabulary = embeddings.words().to_vec();
        let context = CandidateContext {
            words_to_hit: &hit,
            words_to_avoid: &[],
            embeddings: &embeddings,
            vocabulary: &vocabulary,
            n: 5,
            threshold,
        };
        algorithm.generate(&context)
    }

    #[test]
    fn links_every_relevant_target() {
        let guesses = generate(NearestNeighborSum::default(), &["football", "stadium"], 0.35);

        let arsenal = guesses.iter().find(|g| g.clue() == "arsenal").unwrap();
        assert_eq!(arsenal.linked_words(), ["football", "stadium"]);
        assert!(arsenal.similarity_score() > 0.9);
    }

    #[test]
    fn similarity_is_mean_over_links() {
        let guesses = generate(NearestNeighborSum::default(), &["football", "stadium"], 0.35);
        let arsenal = guesses.iter().find(|g| g.clue() == "arsenal").unwrap();

        let embeddings = embeddings();
        let expected = (embeddings.similarity("arsenal", "football").unwrap()
            + embeddings.similarity("arsenal", "stadium").unwrap())
            / 2.0;
        assert!((arsenal.similarity_score() - expected).abs() < 1e-9);
    }

    #[test]
    fn secondary_score_is_strongest_link() {
        let guesses = generate(NearestNeighborSum::default(), &["football", "stadium"], 0.35);
        let arsenal = guesses.iter().find(|g| g.clue() == "arsenal").unwrap();

        let secondary = arsenal.secondary_score().unwrap();
        assert!(secondary >= arsenal.similarity_score());
    }

    #[test]
    fn unrelated_candidates_produce_nothing() {
        let guesses = generate(NearestNeighborSum::default(), &["football"], 0.35);

        assert!(guesses.iter().all(|g| g.clue() != "sky"));
        assert!(guesses.iter().all(|g| g.clue() != "venom"));
    }

    #[test]
    fn board_words_never_proposed() {
        let guesses = generate(NearestNeighborSum::default(), &["football", "stadium"], 0.0);
        assert!(
            guesses
                .iter()
                .all(|g| g.clue() != "football" && g.clue() != "stadium")
        );
    }

    #[test]
    fn results_follow_vocabulary_order() {
        let guesses = generate(NearestNeighborSum::default(), &["football", "poison"], 0.35);
        let clues: Vec<&str> = guesses.iter().map(Guess::clue).collect();
        assert_eq!(clues, ["stadium", "arsenal", "venom"]);
    }

    #[test]
    fn relevance_threshold_overrides_solve_threshold() {
        let strict = NearestNeighborSum::with_relevance_threshold(0.99);
        assert!(generate(strict, &["football", "stadium"], 0.35).is_empty());
    }

    #[test]
    fn missing_targets_yield_empty() {
        let guesses = generate(NearestNeighborSum::default(), &["quidditch"], 0.35);
        assert!(guesses.is_empty());
    }
}
