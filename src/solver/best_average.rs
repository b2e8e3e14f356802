//! Best-average-angle candidate generation
//!
//! For each vocabulary word, searches subsets of the relevant hit words for the
//! tightest cluster around the clue. The cluster score is the average pairwise angular
//! similarity over the clue and the chosen hit words, so hit words that are close to
//! each other as well as to the clue win over a loose spread.

use super::algorithm::{Algorithm, CandidateContext};
use crate::core::{Guess, angular_similarity, cosine_similarity};
use rayon::prelude::*;

/// Subset search for the most tightly clustered hit words
///
/// Only hit words whose cosine similarity to the clue exceeds the relevance threshold
/// take part. Subset sizes range over `[min_linked, max_linked]`, clamped to the
/// number of relevant words. Ties prefer the larger subset, then the earlier one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestAverageAngle {
    pub min_linked: usize,
    pub max_linked: usize,
    /// Per-pair relevance cutoff (default: the solve threshold)
    pub relevance_threshold: Option<f64>,
}

impl BestAverageAngle {
    #[must_use]
    pub const fn new(min_linked: usize, max_linked: usize) -> Self {
        Self {
            min_linked,
            max_linked,
            relevance_threshold: None,
        }
    }
}

impl Default for BestAverageAngle {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

/// Best subset found for one clue
struct Cluster {
    members: Vec<usize>,
    average: f64,
}

impl Algorithm for BestAverageAngle {
    fn generate(&self, context: &CandidateContext<'_>) -> Vec<Guess> {
        let relevance = self.relevance_threshold.unwrap_or(context.threshold);
        let targets = context.hit_vectors();
        if targets.is_empty() {
            return Vec::new();
        }

        // Target-to-target angles do not depend on the clue
        let pair_angles: Vec<Vec<f64>> = targets
            .iter()
            .map(|&(_, a)| {
                targets
                    .iter()
                    .map(|&(_, b)| angular_similarity(cosine_similarity(a, b)))
                    .collect()
            })
            .collect();

        context
            .candidates()
            .par_iter()
            .filter_map(|&(clue, vector)| {
                let cosines: Vec<f64> = targets
                    .iter()
                    .map(|&(_, target)| cosine_similarity(vector, target))
                    .collect();
                let relevant: Vec<usize> = (0..targets.len())
                    .filter(|&i| cosines[i] > relevance)
                    .collect();
                if relevant.is_empty() {
                    return None;
                }

                let cluster = self.best_cluster(&relevant, &cosines, &pair_angles);
                let linked = cluster
                    .members
                    .iter()
                    .map(|&i| targets[i].0.to_string())
                    .collect();
                let mean_cosine = cluster.members.iter().map(|&i| cosines[i]).sum::<f64>()
                    / cluster.members.len() as f64;

                Some(Guess::new(clue, linked, cluster.average).with_secondary_score(mean_cosine))
            })
            .collect()
    }
}

impl BestAverageAngle {
    fn best_cluster(&self, relevant: &[usize], cosines: &[f64], pair_angles: &[Vec<f64>]) -> Cluster {
        let available = relevant.len();
        let lo = self.min_linked.clamp(1, available);
        let hi = self.max_linked.clamp(lo, available);

        let clue_angles: Vec<f64> = cosines.iter().map(|&c| angular_similarity(c)).collect();
        let mut best = Cluster {
            members: Vec::new(),
            average: f64::NEG_INFINITY,
        };

        for size in (lo..=hi).rev() {
            // Pairs in {clue} ∪ subset
            let pairs = (size * (size + 1) / 2) as f64;

            for_each_combination(available, size, |combo| {
                let mut total = 0.0;
                for (pos, &a) in combo.iter().enumerate() {
                    let i = relevant[a];
                    total += clue_angles[i];
                    for &b in &combo[pos + 1..] {
                        total += pair_angles[i][relevant[b]];
                    }
                }

                let average = total / pairs;
                if average > best.average {
                    best.average = average;
                    best.members = combo.iter().map(|&a| relevant[a]).collect();
                }
            });
        }

        best
    }
}

/// Visit every `k`-combination of `0..n` in lexicographic order
fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k == 0 || k > n {
        return;
    }

    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        visit(&idx);

        let mut i = k;
        while i > 0 && idx[i - 1] == i - 1 + n - k {
            i -= 1;
        }
        if i == 0 {
            return;
        }

        idx[i - 1] += 1;
        for j in i..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
