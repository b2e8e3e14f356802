//! Candidate clue representation
//!
//! A Guess is one candidate clue word, the board words it claims to link, and the raw
//! similarity scores produced by the algorithm that proposed it.

use std::fmt;

/// A scored candidate clue
///
/// Created by a candidate generator, scored in place by the scorer, and discarded once
/// the ranked list has been returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    clue: String,
    linked_words: Vec<String>,
    similarity_score: f64,
    secondary_score: Option<f64>,
    score: Option<f64>,
}

impl Guess {
    /// Create a new unscored guess
    ///
    /// The clue and linked words are lowercased.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::core::Guess;
    ///
    /// let guess = Guess::new("Arsenal", vec!["football".into(), "London".into()], 0.42);
    /// assert_eq!(guess.clue(), "arsenal");
    /// assert_eq!(guess.linked_words(), ["football", "london"]);
    /// assert_eq!(guess.num_words_linked(), 2);
    /// assert_eq!(guess.score(), None);
    /// ```
    pub fn new(clue: impl Into<String>, linked_words: Vec<String>, similarity_score: f64) -> Self {
        Self {
            clue: clue.into().to_lowercase(),
            linked_words: linked_words
                .into_iter()
                .map(|word| word.to_lowercase())
                .collect(),
            similarity_score,
            secondary_score: None,
            score: None,
        }
    }

    /// Attach a secondary raw score
    #[must_use]
    pub const fn with_secondary_score(mut self, secondary_score: f64) -> Self {
        self.secondary_score = Some(secondary_score);
        self
    }

    /// The candidate clue word
    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Board words this clue claims to connect, in generation order
    #[inline]
    #[must_use]
    pub fn linked_words(&self) -> &[String] {
        &self.linked_words
    }

    #[inline]
    #[must_use]
    pub const fn similarity_score(&self) -> f64 {
        self.similarity_score
    }

    #[inline]
    #[must_use]
    pub const fn secondary_score(&self) -> Option<f64> {
        self.secondary_score
    }

    /// Number of linked words, the multiplier of the composite score
    #[inline]
    #[must_use]
    pub fn num_words_linked(&self) -> usize {
        self.linked_words.len()
    }

    /// Composite score, `None` until the scorer has run
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Option<f64> {
        self.score
    }

    pub(crate) const fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }

    /// Check that the clue does not give away any linked word
    ///
    /// A clue is illegal when it equals, contains, or is contained in a linked word
    /// (case-insensitive). A guess with no linked words is never legal.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::core::Guess;
    ///
    /// assert!(Guess::new("arsenal", vec!["london".into()], 0.5).is_legal());
    /// assert!(!Guess::new("snow", vec!["snowman".into()], 0.9).is_legal());
    /// assert!(!Guess::new("firework", vec!["fire".into()], 0.9).is_legal());
    /// ```
    #[must_use]
    pub fn is_legal(&self) -> bool {
        !self.linked_words.is_empty()
            && self
                .linked_words
                .iter()
                .all(|word| !word.contains(self.clue.as_str()) && !self.clue.contains(word.as_str()))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.clue, self.linked_words.join(", "))?;
        if let Some(score) = self.score {
            write!(f, " [{score:.3}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn guess_creation_normalizes_case() {
        let guess = Guess::new("ARROW", linked(&["Poison", "BOW"]), 0.4);
        assert_eq!(guess.clue(), "arrow");
        assert_eq!(guess.linked_words(), ["poison", "bow"]);
    }

    #[test]
    fn num_words_linked_matches_len() {
        let guess = Guess::new("arrow", linked(&["poison", "bow", "fire"]), 0.4);
        assert_eq!(guess.num_words_linked(), 3);
    }

    #[test]
    fn score_unset_until_scored() {
        let mut guess = Guess::new("arrow", linked(&["bow"]), 0.4);
        assert_eq!(guess.score(), None);

        guess.set_score(0.8);
        assert_eq!(guess.score(), Some(0.8));
    }

    #[test]
    fn secondary_score_optional() {
        let guess = Guess::new("arrow", linked(&["bow"]), 0.4);
        assert_eq!(guess.secondary_score(), None);

        let guess = guess.with_secondary_score(0.7);
        assert_eq!(guess.secondary_score(), Some(0.7));
    }

    #[test]
    fn legality_rejects_equal_clue() {
        assert!(!Guess::new("Bow", linked(&["bow"]), 0.9).is_legal());
    }

    #[test]
    fn legality_rejects_substrings_both_ways() {
        // Clue inside a linked word
        assert!(!Guess::new("ham", linked(&["hammer", "nail"]), 0.5).is_legal());
        // Linked word inside the clue
        assert!(!Guess::new("fireplace", linked(&["wood", "fire"]), 0.5).is_legal());
    }

    #[test]
    fn legality_accepts_unrelated_spelling() {
        assert!(Guess::new("arsenal", linked(&["football", "london", "stadium"]), 0.5).is_legal());
    }

    #[test]
    fn legality_rejects_empty_links() {
        assert!(!Guess::new("arrow", Vec::new(), 0.5).is_legal());
    }

    #[test]
    fn display_includes_score_once_scored() {
        let mut guess = Guess::new("arrow", linked(&["poison", "bow"]), 0.4);
        assert_eq!(guess.to_string(), "arrow (poison, bow)");

        guess.set_score(0.8);
        assert_eq!(guess.to_string(), "arrow (poison, bow) [0.800]");
    }
}
