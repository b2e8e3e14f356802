//! Clue analysis command
//!
//! Explains how a specific clue fares on a board: its similarity to every board word,
//! which checks it passes, and the score it would get.

use crate::core::Guess;
use crate::solver::{Solver, SolverError};

/// Similarity between the clue and one board word
#[derive(Debug, Clone, PartialEq)]
pub struct WordSimilarity {
    pub word: String,
    /// `None` when the board word has no embedding
    pub similarity: Option<f64>,
    /// Hit words: clears the threshold. Avoid words: stays under the anti-avoid limit.
    pub passes: bool,
}

/// Result of analyzing a clue against a board
#[derive(Debug, Clone)]
pub struct ClueAnalysis {
    pub clue: String,
    pub threshold: f64,
    pub avoid_limit: f64,
    pub hits: Vec<WordSimilarity>,
    pub avoids: Vec<WordSimilarity>,
    /// The clue does not overlap any hit word it would link
    pub legal: bool,
    /// The scored guess, if the clue survives every check
    pub guess: Option<Guess>,
}

impl ClueAnalysis {
    /// Hit words the clue links to
    pub fn linked_words(&self) -> impl Iterator<Item = &str> {
        self.hits
            .iter()
            .filter(|hit| hit.passes)
            .map(|hit| hit.word.as_str())
    }

    /// Avoid words the clue is too close to
    pub fn dangerous_words(&self) -> impl Iterator<Item = &str> {
        self.avoids
            .iter()
            .filter(|avoid| !avoid.passes)
            .map(|avoid| avoid.word.as_str())
    }
}

/// Analyze how `clue` relates to the solver's board
///
/// The clue links every hit word above the threshold. That guess is then run through
/// the same scoring pipeline as generated clues.
///
/// # Errors
///
/// Returns [`SolverError::UnknownClue`] if the clue has no embedding.
pub fn analyze_clue(clue: &str, solver: &Solver<'_>) -> Result<ClueAnalysis, SolverError> {
    let clue = clue.trim().to_lowercase();
    let embeddings = solver.embeddings();
    if !embeddings.contains(&clue) {
        return Err(SolverError::UnknownClue(clue));
    }

    let scorer = solver.scorer();
    let threshold = solver.threshold();
    let avoid_limit = scorer.avoid_limit();

    let hits: Vec<WordSimilarity> = solver
        .words_to_hit()
        .iter()
        .map(|word| {
            let similarity = embeddings.similarity(&clue, word);
            WordSimilarity {
                word: word.clone(),
                similarity,
                passes: similarity.is_some_and(|s| s > threshold),
            }
        })
        .collect();

    let avoids: Vec<WordSimilarity> = solver
        .words_to_avoid()
        .iter()
        .map(|word| {
            let similarity = embeddings.similarity(&clue, word);
            WordSimilarity {
                word: word.clone(),
                similarity,
                passes: similarity.unwrap_or(0.0) < avoid_limit,
            }
        })
        .collect();

    let linked: Vec<String> = hits
        .iter()
        .filter(|hit| hit.passes)
        .map(|hit| hit.word.clone())
        .collect();
    let mean = if linked.is_empty() {
        0.0
    } else {
        hits.iter().filter_map(|hit| hit.similarity.filter(|_| hit.passes)).sum::<f64>()
            / linked.len() as f64
    };

    let candidate = Guess::new(clue.clone(), linked, mean);
    let legal = candidate.is_legal();
    let guess = scorer.top_n_guesses(vec![candidate]).into_iter().next();

    Ok(ClueAnalysis {
        clue,
        threshold,
        avoid_limit,
        hits,
        avoids,
        legal,
        guess,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::Embeddings;

    fn at_angle(degrees: f64) -> Vec<f32> {
        let radians = degrees.to_radians();
        vec![radians.cos() as f32, radians.sin() as f32]
    }

    fn setup_embeddings() -> Embeddings {
        Embeddings::from_pairs([
            ("football", at_angle(0.0)),
            ("london", at_angle(12.0)),
            ("stadium", at_angle(-8.0)),
            ("arsenal", at_angle(2.0)),
            ("poison", at_angle(80.0)),
            ("bow", at_angle(95.0)),
            ("arrow", at_angle(92.0)),
            ("stadiums", at_angle(-7.0)),
        ])
        .unwrap()
    }

    fn solver(embeddings: &Embeddings) -> Solver<'_> {
        Solver::new(
            ["football", "london", "stadium"],
            ["poison", "bow"],
            embeddings,
            5,
            0.35,
        )
        .unwrap()
    }

    #[test]
    fn analyze_good_clue() {
        let embeddings = setup_embeddings();
        let analysis = analyze_clue("Arsenal", &solver(&embeddings)).unwrap();

        assert_eq!(analysis.clue, "arsenal");
        assert!(analysis.legal);
        assert_eq!(
            analysis.linked_words().collect::<Vec<_>>(),
            ["football", "london", "stadium"]
        );
        assert_eq!(analysis.dangerous_words().count(), 0);

        let guess = analysis.guess.unwrap();
        assert_eq!(guess.num_words_linked(), 3);
        assert!((guess.score().unwrap() - 3.0 * guess.similarity_score()).abs() < 1e-12);
    }

    #[test]
    fn analyze_dangerous_clue() {
        let embeddings = setup_embeddings();
        let analysis = analyze_clue("arrow", &solver(&embeddings)).unwrap();

        assert_eq!(analysis.linked_words().count(), 0);
        assert_eq!(
            analysis.dangerous_words().collect::<Vec<_>>(),
            ["poison", "bow"]
        );
        assert!(analysis.guess.is_none());
    }

    #[test]
    fn analyze_illegal_clue() {
        let embeddings = setup_embeddings();
        let analysis = analyze_clue("stadiums", &solver(&embeddings)).unwrap();

        assert!(!analysis.legal);
        assert!(analysis.guess.is_none());
        assert!(analysis.hits.iter().all(|hit| hit.passes));
    }

    #[test]
    fn analyze_reports_missing_board_words() {
        let embeddings = setup_embeddings();
        let solver = Solver::new(["football", "quidditch"], ["poison"], &embeddings, 5, 0.35).unwrap();
        let analysis = analyze_clue("arsenal", &solver).unwrap();

        let quidditch = analysis.hits.iter().find(|h| h.word == "quidditch").unwrap();
        assert_eq!(quidditch.similarity, None);
        assert!(!quidditch.passes);
        assert_eq!(analysis.guess.unwrap().linked_words(), ["football"]);
    }

    #[test]
    fn analyze_unknown_clue() {
        let embeddings = setup_embeddings();
        let result = analyze_clue("zzzz", &solver(&embeddings));
        assert_eq!(result.unwrap_err(), SolverError::UnknownClue("zzzz".to_string()));
    }

    #[test]
    fn avoid_limit_doubles_threshold() {
        let embeddings = setup_embeddings();
        let analysis = analyze_clue("arsenal", &solver(&embeddings)).unwrap();
        assert!((analysis.avoid_limit - 0.7).abs() < 1e-12);
    }
}
