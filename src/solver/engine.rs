//! Main Codenames solver interface

use super::algorithm::{Algorithm, CandidateContext};
use super::scorer::{AVOID_THRESHOLD_MULTIPLIER, ScoreMetric, Scorer};
use super::SolverError;
use crate::core::{Guess, ThresholdStrategy};
use crate::embeddings::Embeddings;
use rustc_hash::FxHashSet;

/// Main Codenames solver
///
/// Holds one request: the words to link, the words to avoid, and how many clues to
/// return. Each call to [`Solver::solve`] runs candidate generation and then scoring.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    words_to_hit: Vec<String>,
    words_to_avoid: Vec<String>,
    embeddings: &'a Embeddings,
    vocabulary: &'a [String],
    n: usize,
    threshold: f64,
    metric: ScoreMetric,
    avoid_multiplier: f64,
}

impl<'a> Solver<'a> {
    /// Create a new solver for one board
    ///
    /// Words are trimmed and lowercased; blank entries and repeats are dropped. The
    /// vocabulary defaults to every word in `embeddings`.
    ///
    /// # Errors
    /// Returns `SolverError` if `words_to_hit` is empty, `n` is zero, or `threshold`
    /// is not a finite number strictly between -1 and 1.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::embeddings::Embeddings;
    /// use codenames_solver::solver::{AlgorithmType, Solver};
    ///
    /// let embeddings = Embeddings::from_pairs([
    ///     ("football", vec![1.0, 0.0]),
    ///     ("poison", vec![0.0, 1.0]),
    ///     ("arsenal", vec![0.95, 0.1]),
    /// ])
    /// .unwrap();
    ///
    /// let solver = Solver::new(["football"], ["poison"], &embeddings, 5, 0.35).unwrap();
    /// let guesses = solver.solve(&AlgorithmType::default());
    /// assert_eq!(guesses[0].clue(), "arsenal");
    ///
    /// assert!(Solver::new(Vec::<String>::new(), ["poison"], &embeddings, 5, 0.35).is_err());
    /// ```
    pub fn new<H, A>(
        words_to_hit: H,
        words_to_avoid: A,
        embeddings: &'a Embeddings,
        n: usize,
        threshold: f64,
    ) -> Result<Self, SolverError>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let words_to_hit = normalize_words(words_to_hit);
        if words_to_hit.is_empty() {
            return Err(SolverError::NoWordsToHit);
        }
        if n == 0 {
            return Err(SolverError::InvalidCount(n));
        }
        if !threshold.is_finite() || threshold.abs() >= 1.0 {
            return Err(SolverError::InvalidThreshold(threshold));
        }

        Ok(Self {
            words_to_hit,
            words_to_avoid: normalize_words(words_to_avoid),
            embeddings,
            vocabulary: embeddings.words(),
            n,
            threshold,
            metric: ScoreMetric::default(),
            avoid_multiplier: AVOID_THRESHOLD_MULTIPLIER,
        })
    }

    /// Evaluate only these candidate clue words, in this order
    #[must_use]
    pub const fn with_vocabulary(mut self, vocabulary: &'a [String]) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    #[must_use]
    pub const fn with_metric(mut self, metric: ScoreMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Override the anti-avoid factor
    ///
    /// # Errors
    /// Returns `SolverError::InvalidAvoidMultiplier` unless the factor is finite and
    /// positive.
    pub fn with_avoid_multiplier(mut self, avoid_multiplier: f64) -> Result<Self, SolverError> {
        if !avoid_multiplier.is_finite() || avoid_multiplier <= 0.0 {
            return Err(SolverError::InvalidAvoidMultiplier(avoid_multiplier));
        }
        self.avoid_multiplier = avoid_multiplier;
        Ok(self)
    }

    /// Generate, filter, and rank clues with the given algorithm
    ///
    /// Returns at most `n` guesses by descending score. An empty vector means no clue
    /// survived filtering at this threshold.
    pub fn solve<A: Algorithm + ?Sized>(&self, algorithm: &A) -> Vec<Guess> {
        for word in self.missing_words() {
            tracing::warn!(word, "No embedding for board word, skipping");
        }

        let context = CandidateContext {
            words_to_hit: &self.words_to_hit,
            words_to_avoid: &self.words_to_avoid,
            embeddings: self.embeddings,
            vocabulary: self.vocabulary,
            n: self.n,
            threshold: self.threshold,
        };

        let raw = algorithm.generate(&context);
        tracing::debug!(
            candidates = raw.len(),
            vocabulary = self.vocabulary.len(),
            "Generated raw guesses"
        );

        let ranked = self.scorer().top_n_guesses(raw);
        tracing::info!(
            returned = ranked.len(),
            threshold = self.threshold,
            "Ranked clues"
        );
        ranked
    }

    /// Scorer configured for this request
    #[must_use]
    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(self.embeddings, &self.words_to_avoid, self.n, self.threshold)
            .with_metric(self.metric)
            .with_avoid_multiplier(self.avoid_multiplier)
    }

    /// Board words (hit or avoid) that have no embedding
    #[must_use]
    pub fn missing_words(&self) -> Vec<&str> {
        self.words_to_hit
            .iter()
            .chain(&self.words_to_avoid)
            .map(String::as_str)
            .filter(|word| !self.embeddings.contains(word))
            .collect()
    }

    #[must_use]
    pub fn words_to_hit(&self) -> &[String] {
        &self.words_to_hit
    }

    #[must_use]
    pub fn words_to_avoid(&self) -> &[String] {
        &self.words_to_avoid
    }

    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub const fn embeddings(&self) -> &'a Embeddings {
        self.embeddings
    }
}

/// Trim, lowercase, drop blanks and repeats (first occurrence wins)
fn normalize_words<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty() && seen.insert(word.clone()))
        .collect()
}

/// Factory resolving a named threshold strategy before building a [`Solver`]
///
/// Defaults: 5 clues, moderate strategy, similarity metric, anti-avoid factor 2,
/// the full embedding vocabulary.
#[derive(Debug, Clone)]
pub struct SolverBuilder {
    words_to_hit: Vec<String>,
    words_to_avoid: Vec<String>,
    n: usize,
    strategy: String,
    vocab_limit: Option<usize>,
    metric: ScoreMetric,
    avoid_multiplier: f64,
}

impl SolverBuilder {
    pub fn new<H, A>(words_to_hit: H, words_to_avoid: A) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            words_to_hit: words_to_hit.into_iter().map(Into::into).collect(),
            words_to_avoid: words_to_avoid.into_iter().map(Into::into).collect(),
            n: 5,
            strategy: "moderate".to_string(),
            vocab_limit: None,
            metric: ScoreMetric::default(),
            avoid_multiplier: AVOID_THRESHOLD_MULTIPLIER,
        }
    }

    #[must_use]
    pub const fn n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Threshold strategy name: risky, moderate, conservative, or a number
    #[must_use]
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Only consider the first `limit` words of the embedding vocabulary
    #[must_use]
    pub const fn vocab_limit(mut self, limit: usize) -> Self {
        self.vocab_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn metric(mut self, metric: ScoreMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub const fn avoid_multiplier(mut self, avoid_multiplier: f64) -> Self {
        self.avoid_multiplier = avoid_multiplier;
        self
    }

    /// Resolve the strategy name to its numeric cutoff
    ///
    /// # Errors
    /// Returns `SolverError::UnknownThreshold` for an unrecognized name.
    pub fn resolve_threshold(&self) -> Result<f64, SolverError> {
        ThresholdStrategy::from_name(&self.strategy)
            .map(ThresholdStrategy::cutoff)
            .ok_or_else(|| SolverError::UnknownThreshold(self.strategy.clone()))
    }

    /// Build a solver over `embeddings`
    ///
    /// # Errors
    /// Returns `SolverError` for an unknown strategy or any configuration rejected by
    /// [`Solver::new`] and [`Solver::with_avoid_multiplier`].
    pub fn build(self, embeddings: &Embeddings) -> Result<Solver<'_>, SolverError> {
        let threshold = self.resolve_threshold()?;
        let solver = Solver::new(
            self.words_to_hit,
            self.words_to_avoid,
            embeddings,
            self.n,
            threshold,
        )?
        .with_metric(self.metric)
        .with_avoid_multiplier(self.avoid_multiplier)?;

        Ok(match self.vocab_limit {
            Some(limit) => {
                let words = embeddings.words();
                solver.with_vocabulary(&words[..limit.min(words.len())])
            }
            None => solver,
        })
    }
}
