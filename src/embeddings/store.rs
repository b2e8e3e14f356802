//! Embedding store
//!
//! Vectors live in one flat buffer, indexed by word. Word order is the order vectors
//! were added, which for frequency-sorted files doubles as a vocabulary ranking.

use super::EmbeddingError;
use crate::core::cosine_similarity;
use rustc_hash::FxHashMap;

/// Read-only mapping from lowercase word to a fixed-length vector
#[derive(Debug, Clone, Default)]
pub struct Embeddings {
    words: Vec<String>,
    index: FxHashMap<String, usize>,
    data: Vec<f32>,
    dimension: usize,
}

impl Embeddings {
    /// Build a store from `(word, vector)` pairs
    ///
    /// Words are lowercased. When a word repeats, the first vector wins.
    ///
    /// # Errors
    /// Returns `EmbeddingError::DimensionMismatch` if vectors differ in length,
    /// `EmbeddingError::Parse` for an empty vector, and `EmbeddingError::Empty` if
    /// no pairs are given.
    ///
    /// # Examples
    /// ```
    /// use codenames_solver::embeddings::Embeddings;
    ///
    /// let embeddings = Embeddings::from_pairs([
    ///     ("king", vec![0.9, 0.1]),
    ///     ("Queen", vec![0.8, 0.3]),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(embeddings.len(), 2);
    /// assert_eq!(embeddings.dimension(), 2);
    /// assert!(embeddings.contains("queen"));
    /// assert!(embeddings.similarity("king", "queen").unwrap() > 0.9);
    /// ```
    pub fn from_pairs<I, W>(pairs: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (W, Vec<f32>)>,
        W: AsRef<str>,
    {
        let mut embeddings = Self::default();
        for (i, (word, vector)) in pairs.into_iter().enumerate() {
            embeddings.push(word.as_ref().to_lowercase(), &vector, i + 1)?;
        }

        if embeddings.is_empty() {
            return Err(EmbeddingError::Empty);
        }
        Ok(embeddings)
    }

    /// Append a vector, fixing the dimension on first insert
    ///
    /// Returns `false` when the word was already present.
    pub(crate) fn push(
        &mut self,
        word: String,
        vector: &[f32],
        line: usize,
    ) -> Result<bool, EmbeddingError> {
        if vector.is_empty() {
            return Err(EmbeddingError::Parse {
                line,
                reason: format!("no vector components for '{word}'"),
            });
        }

        if self.words.is_empty() {
            self.dimension = vector.len();
        } else if vector.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                line,
                word,
                expected: self.dimension,
                found: vector.len(),
            });
        }

        if self.index.contains_key(&word) {
            return Ok(false);
        }

        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        self.data.extend_from_slice(vector);
        Ok(true)
    }

    /// Look up a word's vector
    ///
    /// Tries the word as given, then lowercased.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        let idx = match self.index.get(word) {
            Some(&idx) => idx,
            None => *self.index.get(word.to_lowercase().as_str())?,
        };
        let start = idx * self.dimension;
        Some(&self.data[start..start + self.dimension])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Cosine similarity between two words
    ///
    /// Returns `None` if either word has no vector.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        Some(cosine_similarity(self.get(a)?, self.get(b)?))
    }

    /// All words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of every vector in the store (0 when empty)
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Embeddings {
        Embeddings::from_pairs([
            ("apple", vec![1.0, 0.0, 0.0]),
            ("orange", vec![0.9, 0.1, 0.0]),
            ("car", vec![0.0, 0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn from_pairs_preserves_order() {
        let embeddings = sample();
        assert_eq!(embeddings.words(), ["apple", "orange", "car"]);
        assert_eq!(embeddings.len(), 3);
        assert_eq!(embeddings.dimension(), 3);
    }

    #[test]
    fn lookup_is_case_normalized() {
        let embeddings = sample();
        assert_eq!(embeddings.get("APPLE"), Some(&[1.0, 0.0, 0.0][..]));
        assert!(embeddings.contains("Car"));
        assert!(!embeddings.contains("banana"));
    }

    #[test]
    fn keys_are_lowercased_on_insert() {
        let embeddings = Embeddings::from_pairs([("London", vec![1.0, 2.0])]).unwrap();
        assert_eq!(embeddings.words(), ["london"]);
    }

    #[test]
    fn duplicate_keeps_first_vector() {
        let embeddings =
            Embeddings::from_pairs([("bat", vec![1.0, 0.0]), ("BAT", vec![0.0, 1.0])]).unwrap();
        assert_eq!(embeddings.len(), 1);
        assert_eq!(embeddings.get("bat"), Some(&[1.0, 0.0][..]));
    }

    #[test]
    fn similarity_between_known_words() {
        let embeddings = sample();
        let close = embeddings.similarity("apple", "orange").unwrap();
        let far = embeddings.similarity("apple", "car").unwrap();
        assert!(close > 0.9);
        assert!(far.abs() < 1e-9);
    }

    #[test]
    fn similarity_missing_word_is_none() {
        let embeddings = sample();
        assert_eq!(embeddings.similarity("apple", "banana"), None);
        assert_eq!(embeddings.similarity("banana", "apple"), None);
    }

    #[test]
    fn dimension_mismatch_rejected() {
        let result = Embeddings::from_pairs([("a", vec![1.0, 0.0]), ("b", vec![1.0])]);
        assert!(matches!(
            result,
            Err(EmbeddingError::DimensionMismatch {
                line: 2,
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn empty_vector_rejected() {
        let result = Embeddings::from_pairs([("a", Vec::<f32>::new())]);
        assert!(matches!(result, Err(EmbeddingError::Parse { line: 1, .. })));
    }

    #[test]
    fn no_pairs_is_empty_error() {
        let result = Embeddings::from_pairs(Vec::<(&str, Vec<f32>)>::new());
        assert!(matches!(result, Err(EmbeddingError::Empty)));
    }
}
