//! Guess filtering, scoring, and top-N selection
//!
//! Runs a fixed pipeline over raw guesses: legality, connectivity, anti-avoid,
//! composite scoring, then a stable sort. Each stage removes guesses before the next
//! one runs.

use crate::core::Guess;
use crate::embeddings::Embeddings;

/// Factor applied to the threshold for the anti-avoid check
///
/// A clue is rejected when it is at least this many thresholds close to any avoid word.
pub const AVOID_THRESHOLD_MULTIPLIER: f64 = 2.0;

/// Which raw score feeds the composite score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreMetric {
    /// The guess's `similarity_score`
    #[default]
    SimilarityScore,
    /// The guess's `secondary_score`, falling back to `similarity_score`
    SecondaryScore,
}

impl ScoreMetric {
    #[must_use]
    pub fn value(self, guess: &Guess) -> f64 {
        match self {
            Self::SimilarityScore => guess.similarity_score(),
            Self::SecondaryScore => guess
                .secondary_score()
                .unwrap_or_else(|| guess.similarity_score()),
        }
    }
}

/// Post-processor turning raw guesses into a ranked top-N list
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    embeddings: &'a Embeddings,
    words_to_avoid: &'a [String],
    n: usize,
    threshold: f64,
    metric: ScoreMetric,
    avoid_multiplier: f64,
}

impl<'a> Scorer<'a> {
    #[must_use]
    pub const fn new(
        embeddings: &'a Embeddings,
        words_to_avoid: &'a [String],
        n: usize,
        threshold: f64,
    ) -> Self {
        Self {
            embeddings,
            words_to_avoid,
            n,
            threshold,
            metric: ScoreMetric::SimilarityScore,
            avoid_multiplier: AVOID_THRESHOLD_MULTIPLIER,
        }
    }

    #[must_use]
    pub const fn with_metric(mut self, metric: ScoreMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub const fn with_avoid_multiplier(mut self, avoid_multiplier: f64) -> Self {
        self.avoid_multiplier = avoid_multiplier;
        self
    }

    /// Filter, score, and rank guesses
    ///
    /// Returns at most `n` guesses sorted by descending score; ties keep generation
    /// order. An empty result means no clue is acceptable at this threshold.
    #[must_use]
    pub fn top_n_guesses(&self, guesses: Vec<Guess>) -> Vec<Guess> {
        let total = guesses.len();

        let legal: Vec<Guess> = guesses.into_iter().filter(Guess::is_legal).collect();
        tracing::debug!(total, legal = legal.len(), "Legality filter");

        let connected: Vec<Guess> = legal
            .into_iter()
            .filter(|guess| self.is_connected(guess))
            .collect();
        tracing::debug!(connected = connected.len(), "Connectivity filter");

        let mut safe: Vec<Guess> = connected
            .into_iter()
            .filter(|guess| self.avoids_all(guess))
            .collect();
        tracing::debug!(safe = safe.len(), "Anti-avoid filter");

        for guess in &mut safe {
            self.score_single(guess);
        }

        // sort_by is stable, so equal scores keep generation order
        safe.sort_by(|a, b| composite(b).total_cmp(&composite(a)));
        safe.truncate(self.n);
        safe
    }

    /// Check that every linked word clears the threshold on its own
    ///
    /// A link to a word without an embedding cannot be verified, so it fails, as does
    /// a clue without an embedding.
    #[must_use]
    pub fn is_connected(&self, guess: &Guess) -> bool {
        guess.linked_words().iter().all(|word| {
            self.embeddings
                .similarity(guess.clue(), word)
                .is_some_and(|similarity| similarity > self.threshold)
        })
    }

    /// Check that the clue stays clear of every avoid word
    ///
    /// An avoid word without an embedding counts as similarity 0.
    #[must_use]
    pub fn avoids_all(&self, guess: &Guess) -> bool {
        let limit = self.avoid_limit();
        self.words_to_avoid.iter().all(|word| {
            self.embeddings
                .similarity(guess.clue(), word)
                .unwrap_or(0.0)
                < limit
        })
    }

    /// Similarity to an avoid word at or above which a clue is rejected
    #[must_use]
    pub fn avoid_limit(&self) -> f64 {
        self.threshold * self.avoid_multiplier
    }

    fn score_single(&self, guess: &mut Guess) {
        let score = self.metric.value(guess) * guess.num_words_linked() as f64;
        guess.set_score(score);
    }
}

fn composite(guess: &Guess) -> f64 {
    guess.score().unwrap_or(f64::NEG_INFINITY)
}

/// Filter, score, and rank guesses in one call
///
/// Uses the default anti-avoid multiplier. See [`Scorer::top_n_guesses`].
#[must_use]
pub fn top_n_guesses(
    guesses: Vec<Guess>,
    embeddings: &Embeddings,
    words_to_avoid: &[String],
    n: usize,
    threshold: f64,
    metric: ScoreMetric,
) -> Vec<Guess> {
    Scorer::new(embeddings, words_to_avoid, n, threshold)
        .with_metric(metric)
        .top_n_guesses(guesses)
}
